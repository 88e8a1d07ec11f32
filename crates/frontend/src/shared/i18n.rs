//! Interface labels in Brazilian Portuguese and English.
//!
//! Labels are looked up by dotted key (`nav.orders`, `status.ready`). A key
//! missing from the active locale falls back to pt-BR, then to the key itself.
//! The chosen locale is persisted in localStorage; on first visit it is
//! detected from `navigator.language`.

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

impl Locale {
    /// BCP 47 tag, also the localStorage value
    pub fn code(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::PtBr => "Português",
            Locale::En => "English",
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::PtBr, Locale::En]
    }

    /// Matches on the primary language subtag (`en-US` → `En`)
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "pt" => Some(Locale::PtBr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        match self {
            Locale::PtBr => pt_br(key),
            Locale::En => en(key),
        }
    }
}

/// Label for `key` in `locale`
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    locale
        .lookup(key)
        .or_else(|| Locale::PtBr.lookup(key))
        .unwrap_or(key)
}

// ============================================================================
// Tables
// ============================================================================

fn pt_br(key: &str) -> Option<&'static str> {
    Some(match key {
        "app.title" => "Laboratório Dental",
        "app.subtitle" => "Gestão de pedidos",

        "common.loading" => "Carregando...",
        "common.refresh" => "Atualizar",
        "common.delete" => "Excluir",
        "common.cancel" => "Cancelar",
        "common.save" => "Salvar",
        "common.create" => "Criar",
        "common.actions" => "Ações",
        "common.name" => "Nome",
        "common.email" => "E-mail",
        "common.phone" => "Telefone",
        "common.address" => "Endereço",
        "common.created_at" => "Criado em",
        "common.confirm_delete" => "Excluir este registro?",
        "common.empty" => "Nenhum registro encontrado",
        "common.select" => "Selecionar",
        "common.selected" => "Selecionado",
        "common.no_laboratory" => "Selecione um laboratório para continuar",
        "common.select_laboratory" => "Laboratório",
        "common.coming_soon" => "Esta seção estará disponível em breve",
        "common.sign_out" => "Sair",
        "common.toggle_sidebar" => "Alternar menu",

        "nav.general" => "Geral",
        "nav.settings" => "Configurações",
        "nav.dashboard" => "Painel",
        "nav.laboratories" => "Laboratórios",
        "nav.clients" => "Clientes",
        "nav.orders" => "Pedidos",
        "nav.prostheses" => "Próteses",
        "nav.technicians" => "Técnicos",
        "nav.profile" => "Perfil",
        "nav.account" => "Conta",
        "nav.appearance" => "Aparência",
        "nav.notifications" => "Notificações",
        "nav.display" => "Exibição",

        "laboratories.description" => "Laboratórios cadastrados",
        "laboratories.add" => "Novo laboratório",
        "laboratories.city" => "Cidade",
        "laboratories.street" => "Rua",
        "laboratories.state" => "Estado",
        "laboratories.postal_code" => "CEP",
        "laboratories.country" => "País",
        "laboratories.name_required" => "O nome é obrigatório",

        "clients.description" => "Dentistas e clínicas do laboratório",
        "technicians.description" => "Equipe técnica do laboratório",
        "technicians.role" => "Função",
        "technicians.specializations" => "Especializações",
        "prostheses.description" => "Catálogo de próteses",
        "prostheses.type" => "Tipo",
        "prostheses.material" => "Material",
        "prostheses.shade" => "Cor",
        "prostheses.specifications" => "Especificações",

        "orders.description" => "Pedidos do laboratório",
        "orders.client" => "Cliente",
        "orders.items" => "Itens",
        "orders.units" => "Unidades",
        "orders.status" => "Status",
        "orders.cancel" => "Cancelar pedido",
        "orders.confirm_cancel" => "Cancelar este pedido?",

        "status.received" => "Recebido",
        "status.in_production" => "Em produção",
        "status.quality_check" => "Controle de qualidade",
        "status.ready" => "Pronto",
        "status.delivered" => "Entregue",
        "status.revision" => "Revisão",
        "status.cancelled" => "Cancelado",

        "role.junior" => "Júnior",
        "role.senior" => "Sênior",
        "role.lead" => "Líder",
        "role.manager" => "Gerente",

        "dashboard.welcome" => "Visão geral do laboratório",
        "dashboard.active_orders" => "Pedidos ativos",
        "dashboard.in_production" => "em produção",
        "dashboard.ready" => "prontos",
        "dashboard.total_clients" => "Total de clientes",
        "dashboard.prosthesis_types" => "Tipos de prótese",
        "dashboard.avg_turnaround" => "Prazo médio",
        "dashboard.days" => "dias",
        "dashboard.status_distribution" => "Pedidos por status",
        "dashboard.quick_actions" => "Ações rápidas",
        "dashboard.view_orders" => "Ver pedidos",
        "dashboard.manage_clients" => "Gerenciar clientes",
        "dashboard.prosthesis_catalog" => "Catálogo de próteses",

        "auth.sign_in_title" => "Entrar",
        "auth.sign_in_hint" => "Acesse sua conta para gerenciar o laboratório",
        "auth.sign_in" => "Entrar",
        "auth.provider_unavailable" => "Serviço de autenticação indisponível",

        "theme.title" => "Tema",
        "theme.light" => "Claro",
        "theme.dark" => "Escuro",
        "theme.system" => "Sistema",
        "language.title" => "Idioma",

        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "app.title" => "Dental Lab",
        "app.subtitle" => "Order management",

        "common.loading" => "Loading...",
        "common.refresh" => "Refresh",
        "common.delete" => "Delete",
        "common.cancel" => "Cancel",
        "common.save" => "Save",
        "common.create" => "Create",
        "common.actions" => "Actions",
        "common.name" => "Name",
        "common.email" => "Email",
        "common.phone" => "Phone",
        "common.address" => "Address",
        "common.created_at" => "Created",
        "common.confirm_delete" => "Delete this record?",
        "common.empty" => "No records found",
        "common.select" => "Select",
        "common.selected" => "Selected",
        "common.no_laboratory" => "Select a laboratory to continue",
        "common.select_laboratory" => "Laboratory",
        "common.coming_soon" => "This section is coming soon",
        "common.sign_out" => "Sign out",
        "common.toggle_sidebar" => "Toggle sidebar",

        "nav.general" => "General",
        "nav.settings" => "Settings",
        "nav.dashboard" => "Dashboard",
        "nav.laboratories" => "Laboratories",
        "nav.clients" => "Clients",
        "nav.orders" => "Orders",
        "nav.prostheses" => "Prostheses",
        "nav.technicians" => "Technicians",
        "nav.profile" => "Profile",
        "nav.account" => "Account",
        "nav.appearance" => "Appearance",
        "nav.notifications" => "Notifications",
        "nav.display" => "Display",

        "laboratories.description" => "Registered laboratories",
        "laboratories.add" => "New laboratory",
        "laboratories.city" => "City",
        "laboratories.street" => "Street",
        "laboratories.state" => "State",
        "laboratories.postal_code" => "Postal code",
        "laboratories.country" => "Country",
        "laboratories.name_required" => "Name is required",

        "clients.description" => "Dentists and clinics of the laboratory",
        "technicians.description" => "Laboratory staff",
        "technicians.role" => "Role",
        "technicians.specializations" => "Specializations",
        "prostheses.description" => "Prosthesis catalog",
        "prostheses.type" => "Type",
        "prostheses.material" => "Material",
        "prostheses.shade" => "Shade",
        "prostheses.specifications" => "Specifications",

        "orders.description" => "Laboratory orders",
        "orders.client" => "Client",
        "orders.items" => "Items",
        "orders.units" => "Units",
        "orders.status" => "Status",
        "orders.cancel" => "Cancel order",
        "orders.confirm_cancel" => "Cancel this order?",

        "status.received" => "Received",
        "status.in_production" => "In production",
        "status.quality_check" => "Quality check",
        "status.ready" => "Ready",
        "status.delivered" => "Delivered",
        "status.revision" => "Revision",
        "status.cancelled" => "Cancelled",

        "role.junior" => "Junior",
        "role.senior" => "Senior",
        "role.lead" => "Lead",
        "role.manager" => "Manager",

        "dashboard.welcome" => "Laboratory overview",
        "dashboard.active_orders" => "Active orders",
        "dashboard.in_production" => "in production",
        "dashboard.ready" => "ready",
        "dashboard.total_clients" => "Total clients",
        "dashboard.prosthesis_types" => "Prosthesis types",
        "dashboard.avg_turnaround" => "Avg turnaround",
        "dashboard.days" => "days",
        "dashboard.status_distribution" => "Orders by status",
        "dashboard.quick_actions" => "Quick actions",
        "dashboard.view_orders" => "View orders",
        "dashboard.manage_clients" => "Manage clients",
        "dashboard.prosthesis_catalog" => "Prosthesis catalog",

        "auth.sign_in_title" => "Sign in",
        "auth.sign_in_hint" => "Sign in to manage your laboratory",
        "auth.sign_in" => "Sign in",
        "auth.provider_unavailable" => "Authentication service unavailable",

        "theme.title" => "Theme",
        "theme.light" => "Light",
        "theme.dark" => "Dark",
        "theme.system" => "System",
        "language.title" => "Language",

        _ => return None,
    })
}

// ============================================================================
// Context
// ============================================================================

const LOCALE_STORAGE_KEY: &str = "app-locale";

fn load_locale_from_storage() -> Option<Locale> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .and_then(|code| Locale::from_code(&code))
}

fn save_locale_to_storage(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.code());
    }
}

fn detect_browser_locale() -> Option<Locale> {
    window()
        .and_then(|w| w.navigator().language())
        .and_then(|lang| Locale::from_code(&lang))
}

fn apply_document_lang(locale: Locale) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", locale.code());
    }
}

#[derive(Clone, Copy)]
pub struct I18nContext {
    pub locale: RwSignal<Locale>,
}

impl I18nContext {
    /// Label in the current locale; tracks the locale when read reactively
    pub fn t(&self, key: &str) -> String {
        t(self.locale.get(), key).to_string()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        save_locale_to_storage(locale);
        apply_document_lang(locale);
    }
}

#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let initial = load_locale_from_storage()
        .or_else(detect_browser_locale)
        .unwrap_or_default();
    apply_document_lang(initial);

    provide_context(I18nContext {
        locale: RwSignal::new(initial),
    });

    children()
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}

/// Locale dropdown for the top header
#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <select
            class="top-header__select"
            title=move || i18n.t("language.title")
            on:change=move |ev| {
                if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
                    i18n.set_locale(locale);
                }
            }
        >
            {Locale::all().into_iter().map(|locale| view! {
                <option
                    value=locale.code()
                    selected=move || i18n.locale.get() == locale
                >
                    {locale.display_name()}
                </option>
            }).collect_view()}
        </select>
    }
}
