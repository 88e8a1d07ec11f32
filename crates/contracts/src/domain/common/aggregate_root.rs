use super::BaseAggregate;

/// Trait implemented by every aggregate the dashboard reads from the API.
pub trait AggregateRoot {
    /// Server-assigned fields of this record
    fn base(&self) -> &BaseAggregate;

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection segment of the REST path (e.g. "clients")
    fn collection_name() -> &'static str;

    /// Record identifier
    fn id(&self) -> &str {
        &self.base().id
    }

    /// Full name of the aggregate, also used as its tab key
    /// (e.g. "a002_clients")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
