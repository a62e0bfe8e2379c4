//! Form specifications
//!
//! A [`FormSpec`] is plain data describing one submit-driven form: its controls,
//! endpoint, confirmation pair, what success does and where conflict messages go.
//! [`AccountForm`] holds the specifications of the account pages.

use indexmap::IndexMap;
use recreio_client::dispatcher::status;
use recreio_client::Endpoint;
use recreio_form::{Constraint, Field, Form, FormControls, FormError, InputKind};

/// Shown on the confirmation control when the pair differs
pub const PASSWORD_MISMATCH: &str = "As senhas não coincidem.";

/// One control of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Element id
    pub id: String,
    /// Submission key; defaults to the id
    pub name: String,
    /// Input type
    pub kind: InputKind,
    /// Native constraints
    pub constraints: Vec<Constraint>,
    /// Whether the value goes into the request body
    pub submitted: bool,
}

impl FieldSpec {
    /// Submitted control named after its id
    #[must_use]
    pub fn new(id: impl Into<String>, kind: InputKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            constraints: Vec::new(),
            submitted: true,
        }
    }

    /// With submission key
    #[inline]
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With `required`
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.constraints.push(Constraint::Required);
        self
    }

    /// With `minlength`
    #[inline]
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.constraints.push(Constraint::MinLength(min));
        self
    }

    /// With `maxlength`
    #[inline]
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.constraints.push(Constraint::MaxLength(max));
        self
    }

    /// Kept out of the request body
    #[inline]
    #[must_use]
    pub fn not_submitted(mut self) -> Self {
        self.submitted = false;
        self
    }

    /// Build the control
    #[must_use]
    pub fn build(&self) -> Field {
        self.constraints.iter().fold(
            Field::new(self.id.clone(), self.kind).with_name(self.name.clone()),
            |field, constraint| field.with_constraint(*constraint),
        )
    }
}

/// Two controls that must hold the same value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Control holding the value
    pub field: String,
    /// Control repeating it; receives the mismatch message
    pub confirm: String,
    /// Mismatch message
    pub message: String,
}

impl Confirmation {
    /// Password pair with the default mismatch message
    #[must_use]
    pub fn passwords(field: impl Into<String>, confirm: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            confirm: confirm.into(),
            message: PASSWORD_MISMATCH.to_string(),
        }
    }
}

/// What happens after a 2xx
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessAction {
    /// Alert shown before navigating
    pub alert: Option<String>,
    /// Route that replaces the current history entry
    pub route: String,
}

/// Where a 401/409 message is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTarget {
    /// On the control matching this id or name
    Field(String),
    /// In a page-level alert
    Alert,
}

/// Specification of one submit-driven form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    /// Form element id
    pub id: String,
    /// Target endpoint
    pub endpoint: Endpoint,
    /// Submit button label at rest
    pub submit_label: String,
    /// Submit button label while in flight; `None` keeps the label
    pub submitting_label: Option<String>,
    /// Controls in document order
    pub fields: Vec<FieldSpec>,
    /// Pair checked before dispatch
    pub confirmation: Option<Confirmation>,
    /// Behavior on 2xx
    pub success: SuccessAction,
    /// Routing of domain conflicts by status
    pub conflicts: IndexMap<u16, MessageTarget>,
}

impl FormSpec {
    /// Form with no controls that navigates to `route` on success
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        endpoint: Endpoint,
        submit_label: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            endpoint,
            submit_label: submit_label.into(),
            submitting_label: None,
            fields: Vec::new(),
            confirmation: None,
            success: SuccessAction {
                alert: None,
                route: route.into(),
            },
            conflicts: IndexMap::new(),
        }
    }

    /// With control
    #[inline]
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// With in-flight label
    #[inline]
    #[must_use]
    pub fn with_submitting_label(mut self, label: impl Into<String>) -> Self {
        self.submitting_label = Some(label.into());
        self
    }

    /// With confirmation pair
    #[inline]
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = Some(confirmation);
        self
    }

    /// With alert on success
    #[inline]
    #[must_use]
    pub fn with_success_alert(mut self, alert: impl Into<String>) -> Self {
        self.success.alert = Some(alert.into());
        self
    }

    /// With conflict route for `status`
    #[inline]
    #[must_use]
    pub fn with_conflict(mut self, status: u16, target: MessageTarget) -> Self {
        self.conflicts.insert(status, target);
        self
    }

    /// Route for a conflict status, if this form has one
    #[inline]
    #[must_use]
    pub fn conflict_target(&self, status: u16) -> Option<&MessageTarget> {
        self.conflicts.get(&status)
    }

    /// Build a fresh form
    ///
    /// # Errors
    /// `FormError::DuplicateField` if two controls share an id or name
    pub fn build_form(&self) -> Result<Form, FormError> {
        self.fields
            .iter()
            .try_fold(Form::new(self.id.clone(), self.submit_label.clone()), |form, field| {
                form.with_field(field.build())
            })
    }

    /// Request body values keyed by submission name, in document order
    ///
    /// Controls missing from `controls` submit an empty value.
    #[must_use]
    pub fn collect_values(&self, controls: &FormControls) -> IndexMap<String, String> {
        self.fields
            .iter()
            .filter(|field| field.submitted)
            .map(|field| {
                let value = controls.value(&field.id).unwrap_or_default();
                (field.name.clone(), value.to_string())
            })
            .collect()
    }
}

/// Account pages with a submit-driven form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountForm {
    /// Create account
    Register,
    /// Start session
    Login,
    /// End session
    Logout,
    /// Change display name
    UpdateName,
    /// Change e-mail
    UpdateEmail,
    /// Change password
    UpdatePassword,
    /// Delete account
    DeleteAccount,
}

impl AccountForm {
    /// Every account form
    pub const ALL: [Self; 7] = [
        Self::Register,
        Self::Login,
        Self::Logout,
        Self::UpdateName,
        Self::UpdateEmail,
        Self::UpdatePassword,
        Self::DeleteAccount,
    ];

    /// Default specification of this form
    #[must_use]
    pub fn spec(self) -> FormSpec {
        match self {
            Self::Register => FormSpec::new("register-form", Endpoint::REGISTER, "Criar conta", "/inicio")
                .with_field(FieldSpec::new("name", InputKind::Text).required().max_length(64))
                .with_field(FieldSpec::new("email", InputKind::Email).required())
                .with_field(password("password").min_length(8).max_length(128))
                .with_field(password("confirm-password").not_submitted())
                .with_confirmation(Confirmation::passwords("password", "confirm-password"))
                .with_submitting_label("Criando conta...")
                .with_success_alert("Cadastro realizado com sucesso!")
                .with_conflict(status::CONFLICT, MessageTarget::Alert),
            Self::Login => FormSpec::new("login-form", Endpoint::LOGIN, "Entrar", "/inicio")
                .with_field(FieldSpec::new("email", InputKind::Email).required())
                .with_field(password("password"))
                .with_submitting_label("Entrando...")
                .with_conflict(status::UNAUTHORIZED, MessageTarget::Field("password".to_string()))
                .with_conflict(status::CONFLICT, MessageTarget::Alert),
            Self::Logout => FormSpec::new("logout-form", Endpoint::LOGOUT, "Sair", "/")
                .with_submitting_label("Saindo...")
                .with_conflict(status::UNAUTHORIZED, MessageTarget::Alert),
            Self::UpdateName => FormSpec::new("name-form", Endpoint::UPDATE_NAME, "Salvar", "/minha-conta")
                .with_field(FieldSpec::new("name", InputKind::Text).required().max_length(64))
                .with_submitting_label("Atualizando...")
                .with_success_alert("Nome atualizado com sucesso!")
                .with_conflict(status::UNAUTHORIZED, MessageTarget::Alert),
            Self::UpdateEmail => FormSpec::new("email-form", Endpoint::UPDATE_EMAIL, "Salvar", "/minha-conta")
                .with_field(FieldSpec::new("email", InputKind::Email).required())
                .with_submitting_label("Atualizando...")
                .with_success_alert("E-mail atualizado com sucesso!")
                .with_conflict(status::CONFLICT, MessageTarget::Field("email".to_string()))
                .with_conflict(status::UNAUTHORIZED, MessageTarget::Alert),
            Self::UpdatePassword => FormSpec::new(
                "password-form",
                Endpoint::UPDATE_PASSWORD,
                "Salvar",
                "/minha-conta",
            )
            .with_field(password("current-password").named("current_password"))
            .with_field(
                password("new-password")
                    .named("new_password")
                    .min_length(8)
                    .max_length(128),
            )
            .with_field(password("confirm-new-password").not_submitted())
            .with_confirmation(Confirmation::passwords("new-password", "confirm-new-password"))
            .with_submitting_label("Atualizando...")
            .with_success_alert("Senha atualizada com sucesso!")
            .with_conflict(
                status::UNAUTHORIZED,
                MessageTarget::Field("current-password".to_string()),
            ),
            Self::DeleteAccount => FormSpec::new(
                "delete-account-form",
                Endpoint::DELETE_ACCOUNT,
                "Excluir conta",
                "/",
            )
            .with_field(password("password"))
            .with_submitting_label("Excluindo...")
            .with_success_alert("Conta excluída com sucesso!")
            .with_conflict(status::UNAUTHORIZED, MessageTarget::Field("password".to_string())),
        }
    }
}

fn password(id: &str) -> FieldSpec {
    FieldSpec::new(id, InputKind::Password).required()
}
