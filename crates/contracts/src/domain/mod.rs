pub mod a001_laboratory;
pub mod a002_client;
pub mod a003_technician;
pub mod a004_prosthesis;
pub mod a005_order;
pub mod common;
