//! Account Flow Tests
//!
//! Drives the account forms through the full pipeline against scripted
//! transports and a recording host.

use async_trait::async_trait;
use mockall::mock;
use pretty_assertions::assert_eq;
use recreio_client::{ApiRequest, ApiResponse, Endpoint, Method, Transport, TransportError};
use recreio_core::forms::PASSWORD_MISMATCH;
use recreio_core::{AccountForm, Messages, OutcomeKind, SubmissionPipeline};
use recreio_form::Form;
use recreio_test_utils::{HostEvent, RecordingHost, ScriptedTransport};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const GENERIC: &str = "Ocorreu um erro inesperado. Por favor, tente novamente mais tarde.";

mock! {
    Api {}

    #[async_trait]
    impl Transport for Api {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
    }
}

fn pipeline(transport: Arc<dyn Transport>) -> (Arc<RecordingHost>, SubmissionPipeline) {
    let host = Arc::new(RecordingHost::new());
    let pipeline = SubmissionPipeline::new(transport, host.clone(), Messages::default());
    (host, pipeline)
}

fn fill(form: AccountForm, values: &[(&str, &str)]) -> Form {
    let mut built = form.spec().build_form().unwrap();
    for (id, value) in values {
        built.input(id, *value).unwrap();
    }
    built
}

fn login_form() -> Form {
    fill(
        AccountForm::Login,
        &[("email", "ana@example.com"), ("password", "Senha123!")],
    )
}

fn register_form(confirm: &str) -> Form {
    fill(
        AccountForm::Register,
        &[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("password", "Senha123!"),
            ("confirm-password", confirm),
        ],
    )
}

fn assert_button_at_rest(form: &Form, label: &str) {
    assert!(!form.submit_button().is_disabled());
    assert_eq!(form.submit_button().label(), label);
}

#[tokio::test]
async fn test_login_success_navigates_without_alert() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, json!({"message": "ok"})));
    let (host, pipeline) = pipeline(transport.clone());
    let spec = AccountForm::Login.spec();
    let mut form = login_form();

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::Success);
    assert!(report.submission.is_some());
    assert_eq!(host.events(), vec![HostEvent::Navigate("/inicio".to_string())]);
    assert_button_at_rest(&form, "Entrar");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/api/auth/login");
    assert_eq!(
        transport.request_json(0).unwrap(),
        json!({"email": "ana@example.com", "password": "Senha123!"})
    );
}

#[tokio::test]
async fn test_login_wrong_password_marks_password_field() {
    let transport = Arc::new(ScriptedTransport::new().respond(401, json!({"message": "Senha incorreta"})));
    let (host, pipeline) = pipeline(transport);
    let spec = AccountForm::Login.spec();
    let mut form = login_form();

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::DomainConflict);
    assert_eq!(form.field("password").unwrap().shown_message(), Some("Senha incorreta"));
    assert!(host.events().is_empty());
    assert_button_at_rest(&form, "Entrar");

    form.input("password", "Senha124!").unwrap();
    let password = form.field("password").unwrap();
    assert_eq!(password.shown_message(), None);
    assert!(!password.validity().is_set());
    assert_eq!(form.controls().listener_count("password"), 0);
}

#[tokio::test]
async fn test_register_mismatch_issues_no_request() {
    let mut transport = MockApi::new();
    transport.expect_send().times(0);
    let (host, pipeline) = pipeline(Arc::new(transport));
    let spec = AccountForm::Register.spec();
    let mut form = register_form("Senha124!");

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::Rejected);
    assert!(report.submission.is_none());
    assert_eq!(
        form.field("confirm-password").unwrap().shown_message(),
        Some(PASSWORD_MISMATCH)
    );
    assert_button_at_rest(&form, "Criar conta");
    assert!(host.events().is_empty());
}

#[tokio::test]
async fn test_native_violation_blocks_dispatch() {
    let mut transport = MockApi::new();
    transport.expect_send().times(0);
    let (host, pipeline) = pipeline(Arc::new(transport));
    let spec = AccountForm::UpdateEmail.spec();
    let mut form = fill(AccountForm::UpdateEmail, &[("email", "ana")]);

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::Blocked);
    assert_eq!(
        form.field("email").unwrap().shown_message(),
        Some("Insira um endereço de e-mail válido.")
    );
    assert!(host.events().is_empty());
}

#[tokio::test]
async fn test_register_validation_errors_are_joined_per_field() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        400,
        json!({
            "message": "Erro de validação.",
            "errors": {
                "password": ["Muito curta.", "Deve conter número"],
                "nickname": ["Obrigatório."]
            }
        }),
    ));
    let (host, pipeline) = pipeline(transport.clone());
    let spec = AccountForm::Register.spec();
    let mut form = register_form("Senha123!");

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::ValidationFailure);
    assert_eq!(
        form.field("password").unwrap().shown_message(),
        Some("Muito curta, deve conter número")
    );
    assert_eq!(
        host.alerts(),
        vec!["Erros no campo nickname: \n- Obrigatório.".to_string()]
    );
    assert!(host.locations().is_empty());
    assert_button_at_rest(&form, "Criar conta");
    assert_eq!(
        transport.request_json(0).unwrap(),
        json!({"name": "Ana", "email": "ana@example.com", "password": "Senha123!"})
    );
}

#[tokio::test]
async fn test_register_conflict_is_alerted() {
    let transport =
        Arc::new(ScriptedTransport::new().respond(409, json!({"message": "Email já está em uso."})));
    let (host, pipeline) = pipeline(transport);
    let spec = AccountForm::Register.spec();
    let mut form = register_form("Senha123!");

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::DomainConflict);
    assert_eq!(host.alerts(), vec!["Email já está em uso.".to_string()]);
    assert_eq!(form.field("email").unwrap().shown_message(), None);
}

#[tokio::test]
async fn test_update_email_conflict_marks_email_field() {
    let transport =
        Arc::new(ScriptedTransport::new().respond(409, json!({"message": "Email já está em uso."})));
    let (host, pipeline) = pipeline(transport);
    let spec = AccountForm::UpdateEmail.spec();
    let mut form = fill(AccountForm::UpdateEmail, &[("email", "bia@example.com")]);

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::DomainConflict);
    assert_eq!(form.field("email").unwrap().shown_message(), Some("Email já está em uso."));
    assert!(host.events().is_empty());
    assert_button_at_rest(&form, "Salvar");
}

#[tokio::test]
async fn test_success_alert_precedes_navigation() {
    let transport = Arc::new(ScriptedTransport::new().respond_raw(200, ""));
    let (host, pipeline) = pipeline(transport);
    let spec = AccountForm::UpdateName.spec();
    let mut form = fill(AccountForm::UpdateName, &[("name", "Bia")]);

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::Success);
    assert_eq!(
        host.events(),
        vec![
            HostEvent::Alert("Nome atualizado com sucesso!".to_string()),
            HostEvent::Navigate("/minha-conta".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_logout_sends_no_body() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, json!({})));
    let (host, pipeline) = pipeline(transport.clone());
    let spec = AccountForm::Logout.spec();
    let mut form = spec.build_form().unwrap();

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::Success);
    assert_eq!(transport.requests()[0].body, None);
    assert_eq!(transport.requests()[0].path, Endpoint::LOGOUT.path);
    assert_eq!(host.locations(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_server_failure_alerts_message() {
    let transport = Arc::new(
        ScriptedTransport::new().respond(500, json!({"message": "Ocorreu um erro interno no servidor."})),
    );
    let (host, pipeline) = pipeline(transport);
    let spec = AccountForm::DeleteAccount.spec();
    let mut form = fill(AccountForm::DeleteAccount, &[("password", "Senha123!")]);

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::ServerFailure);
    assert_eq!(host.alerts(), vec!["Ocorreu um erro interno no servidor.".to_string()]);
    assert_button_at_rest(&form, "Excluir conta");
}

#[tokio::test]
async fn test_unexpected_status_alerts_generic_message() {
    let transport = Arc::new(ScriptedTransport::new().respond_raw(404, "Not Found"));
    let (host, pipeline) = pipeline(transport);
    let spec = AccountForm::Login.spec();
    let mut form = login_form();

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::UnexpectedStatus);
    assert_eq!(host.alerts(), vec![GENERIC.to_string()]);
    assert!(host.locations().is_empty());
    assert_button_at_rest(&form, "Entrar");
}

#[tokio::test]
async fn test_unrouted_conflict_alerts_generic_message() {
    let transport = Arc::new(ScriptedTransport::new().respond(409, json!({"message": "Conflito"})));
    let (host, pipeline) = pipeline(transport);
    let spec = AccountForm::UpdatePassword.spec();
    let mut form = fill(
        AccountForm::UpdatePassword,
        &[
            ("current-password", "Antiga123!"),
            ("new-password", "Nova1234!"),
            ("confirm-new-password", "Nova1234!"),
        ],
    );

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::UnexpectedStatus);
    assert_eq!(host.alerts(), vec![GENERIC.to_string()]);
    assert_eq!(form.field("current-password").unwrap().shown_message(), None);
}

#[tokio::test]
async fn test_unreadable_and_incomplete_bodies_alert_generic_message() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .respond_raw(401, "<html>Unauthorized</html>")
            .respond(400, json!({"message": "Erro de validação."})),
    );
    let (host, pipeline) = pipeline(transport);
    let spec = AccountForm::Login.spec();
    let mut form = login_form();

    assert_eq!(
        pipeline.submit(&mut form, &spec).await.kind,
        OutcomeKind::NetworkOrParseFailure
    );
    assert_eq!(
        pipeline.submit(&mut form, &spec).await.kind,
        OutcomeKind::NetworkOrParseFailure
    );
    assert_eq!(host.alerts(), vec![GENERIC.to_string(), GENERIC.to_string()]);
    assert_eq!(form.field("password").unwrap().shown_message(), None);
}

#[tokio::test]
async fn test_network_failure_restores_button_for_retry() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .fail("connection reset")
            .respond(200, json!({"message": "ok"})),
    );
    let (host, pipeline) = pipeline(transport.clone());
    let spec = AccountForm::Login.spec();
    let mut form = login_form();

    let first = pipeline.submit(&mut form, &spec).await;
    assert_eq!(first.kind, OutcomeKind::NetworkOrParseFailure);
    assert_button_at_rest(&form, "Entrar");

    let second = pipeline.submit(&mut form, &spec).await;
    assert_eq!(second.kind, OutcomeKind::Success);
    assert_ne!(first.submission, second.submission);
    assert_eq!(transport.request_count(), 2);
    assert_eq!(
        host.events(),
        vec![
            HostEvent::Alert(GENERIC.to_string()),
            HostEvent::Navigate("/inicio".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_dropped_submission_restores_button() {
    let transport = Arc::new(ScriptedTransport::new().hang());
    let (host, pipeline) = pipeline(transport.clone());
    let spec = AccountForm::Login.spec();
    let mut form = login_form();

    let result = tokio::time::timeout(Duration::from_millis(50), pipeline.submit(&mut form, &spec)).await;

    assert!(result.is_err());
    assert_eq!(transport.request_count(), 1);
    assert_button_at_rest(&form, "Entrar");
    assert!(host.events().is_empty());
}

#[tokio::test]
async fn test_mocked_transport_sees_put_with_json_body() {
    let mut transport = MockApi::new();
    transport
        .expect_send()
        .withf(|request| {
            request.method == Method::Put
                && request.path == "/api/my-account/password"
                && request.body.as_deref()
                    == Some(br#"{"current_password":"Antiga123!","new_password":"Nova1234!"}"#.as_slice())
        })
        .times(1)
        .returning(|_| Ok(ApiResponse::new(200, Vec::new())));
    let (host, pipeline) = pipeline(Arc::new(transport));
    let spec = AccountForm::UpdatePassword.spec();
    let mut form = fill(
        AccountForm::UpdatePassword,
        &[
            ("current-password", "Antiga123!"),
            ("new-password", "Nova1234!"),
            ("confirm-new-password", "Nova1234!"),
        ],
    );

    let report = pipeline.submit(&mut form, &spec).await;

    assert_eq!(report.kind, OutcomeKind::Success);
    assert_eq!(
        host.alerts(),
        vec!["Senha atualizada com sucesso!".to_string()]
    );
}
