use super::*;

fn valid_input() -> FormInput {
    FormInput {
        name: "Ana".to_owned(),
        email: "ana@ex.com".to_owned(),
        phone: String::new(),
        message: "Olá".to_owned(),
        phone_required: false,
    }
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn valid_submission_passes_with_trimmed_name() {
    let mut input = valid_input();
    input.name = "  Ana  ".to_owned();
    let submission = validate(&input).expect("valid");
    assert_eq!(submission.name, "Ana");
}

#[test]
fn blank_name_reports_missing_required() {
    let mut input = valid_input();
    input.name = "   ".to_owned();
    let err = validate(&input).unwrap_err();
    assert_eq!(err, ValidationError::MissingRequired(vec![Field::Name]));
    assert_eq!(err.to_string(), "Por favor, preencha todos os campos obrigatórios.");
}

#[test]
fn all_blank_marks_every_required_field_and_focuses_first() {
    let err = validate(&FormInput::default()).unwrap_err();
    assert_eq!(err.fields(), vec![Field::Name, Field::Email, Field::Message]);
    assert_eq!(err.focus(), Some(Field::Name));
}

#[test]
fn focus_follows_field_order_not_detection_order() {
    let mut input = valid_input();
    input.email = String::new();
    input.message = "\n\t".to_owned();
    let err = validate(&input).unwrap_err();
    assert_eq!(err.focus(), Some(Field::Email));
    assert_eq!(err.fields(), vec![Field::Email, Field::Message]);
}

#[test]
fn blank_required_wins_over_malformed_email() {
    let mut input = valid_input();
    input.message = String::new();
    input.email = "not-an-email".to_owned();
    assert_eq!(
        validate(&input),
        Err(ValidationError::MissingRequired(vec![Field::Message]))
    );
}

#[test]
fn optional_phone_may_be_blank() {
    assert!(validate(&valid_input()).is_ok());
}

#[test]
fn required_blank_phone_is_missing_required() {
    let mut input = valid_input();
    input.phone_required = true;
    input.phone = "  ".to_owned();
    assert_eq!(
        validate(&input),
        Err(ValidationError::MissingRequired(vec![Field::Phone]))
    );
}

// =============================================================
// Email
// =============================================================

#[test]
fn malformed_email_blocks_even_when_others_valid() {
    for email in ["ana", "ana@", "ana@ex", "@ex.com", "ana@ex.", "a na@ex.com", "ana@@ex.com"] {
        let mut input = valid_input();
        input.email = email.to_owned();
        let err = validate(&input).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail, "email {email:?}");
        assert_eq!(err.fields(), vec![Field::Email]);
    }
}

#[test]
fn email_message_text() {
    assert_eq!(
        ValidationError::InvalidEmail.to_string(),
        "Digite um e-mail válido (ex.: usuario@dominio.com)."
    );
}

#[test]
fn email_pattern_accepts_permissive_shapes() {
    assert!(is_valid_email("ana@ex.com"));
    assert!(is_valid_email("  ana@ex.com  "));
    assert!(is_valid_email("a.b+c@sub.dominio.com.br"));
    assert!(is_valid_email("x@y.z"));
}

// =============================================================
// Phone
// =============================================================

#[test]
fn phone_digits_ignore_punctuation() {
    assert_eq!(phone_digit_count("(11) 98765-4321"), 11);
    assert_eq!(phone_digit_count("+55 11"), 4);
    assert_eq!(phone_digit_count("abc"), 0);
}

#[test]
fn required_phone_with_nine_digits_is_rejected() {
    let mut input = valid_input();
    input.phone_required = true;
    input.phone = "(11) 8765-432".to_owned();
    let err = validate(&input).unwrap_err();
    assert_eq!(err, ValidationError::InvalidPhone);
    assert_eq!(err.focus(), Some(Field::Phone));
    assert_eq!(err.to_string(), "Informe um telefone válido com DDD.");
}

#[test]
fn required_phone_with_ten_digits_passes() {
    let mut input = valid_input();
    input.phone_required = true;
    input.phone = "(11) 8765-4321".to_owned();
    assert!(validate(&input).is_ok());
}

#[test]
fn short_phone_is_ignored_when_not_required() {
    let mut input = valid_input();
    input.phone = "123".to_owned();
    assert!(validate(&input).is_ok());
}

#[test]
fn email_checked_before_phone() {
    let mut input = valid_input();
    input.phone_required = true;
    input.phone = "1".to_owned();
    input.email = "bad".to_owned();
    assert_eq!(validate(&input), Err(ValidationError::InvalidEmail));
}

// =============================================================
// Success message
// =============================================================

#[test]
fn success_message_interpolates_name() {
    let submission = validate(&valid_input()).expect("valid");
    assert_eq!(submission.success_message(), "Obrigado, Ana! Mensagem enviada com sucesso.");
}

#[test]
fn success_message_uses_name_read_when_send_completes() {
    let mut input = valid_input();
    assert!(validate(&input).is_ok());

    // The visitor edits the name while the button shows "Enviando...".
    input.name = "  Bia ".to_owned();
    assert_eq!(
        Submission::new(&input.name).success_message(),
        "Obrigado, Bia! Mensagem enviada com sucesso."
    );
}

#[test]
fn success_message_with_name_cleared_during_send() {
    assert_eq!(
        Submission::new("   ").success_message(),
        "Obrigado, ! Mensagem enviada com sucesso."
    );
}
