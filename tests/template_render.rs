//! End-to-end tests for placeholder template rendering.

use genprompt::template::{PromptTemplate, TemplateError};
use genprompt::types::MessageType;
use genprompt::Error;
use serde_json::Value;
use std::collections::HashMap;

fn vars(entries: &[(&str, &str)]) -> HashMap<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(*v)))
        .collect()
}

#[test]
fn test_placeholder_free_text_renders_unchanged() {
    let text = r#"[INST] Generate a JSON object:
{
    "name": "John",
    "lastname": "Smith"
}
[/INST]"#;
    let template = PromptTemplate::new(text);
    assert_eq!(template.render().expect("render should succeed"), text);
}

#[test]
fn test_every_placeholder_is_substituted() {
    let template = PromptTemplate::new("{greeting}, {name}! {greeting} again.");
    let rendered = template
        .render_with(&vars(&[("greeting", "Hello"), ("name", "Ada")]))
        .unwrap();
    assert_eq!(rendered, "Hello, Ada! Hello again.");
}

#[test]
fn test_map_insertion_order_does_not_matter() {
    let template = PromptTemplate::new("{a}-{b}-{c}");

    let mut forward = HashMap::new();
    forward.insert("a".to_string(), Value::from("1"));
    forward.insert("b".to_string(), Value::from("2"));
    forward.insert("c".to_string(), Value::from("3"));

    let mut reverse = HashMap::new();
    reverse.insert("c".to_string(), Value::from("3"));
    reverse.insert("b".to_string(), Value::from("2"));
    reverse.insert("a".to_string(), Value::from("1"));

    assert_eq!(
        template.render_with(&forward).unwrap(),
        template.render_with(&reverse).unwrap()
    );
}

#[test]
fn test_missing_variable_fails_with_its_name() {
    let template = PromptTemplate::new("Tell me about {topic}.");
    let err = template.render_with(&HashMap::new()).unwrap_err();
    match err {
        Error::Template(TemplateError::MissingVariables(names)) => {
            assert_eq!(names, vec!["topic".to_string()]);
        }
        other => panic!("expected a template error, got: {other:?}"),
    }
}

#[test]
fn test_unused_variables_are_ignored() {
    let template = PromptTemplate::new("Just {this}.");
    let rendered = template
        .render_with(&vars(&[("this", "one"), ("unused", "extra")]))
        .unwrap();
    assert_eq!(rendered, "Just one.");
}

#[test]
fn test_created_message_content_equals_rendered_text() {
    let template = PromptTemplate::new("Hi {name}");
    let variables = vars(&[("name", "Ada")]);
    let message = template.create_message_with(&variables).unwrap();
    assert_eq!(message.content, template.render_with(&variables).unwrap());
    assert_eq!(message.message_type, MessageType::User);

    let system = PromptTemplate::system("Context: {ctx}");
    let message = system.create_message_with(&vars(&[("ctx", "be brief")])).unwrap();
    assert_eq!(message.message_type, MessageType::System);
    assert_eq!(message.content, "Context: be brief");
}

#[test]
fn test_create_yields_single_message_prompt() {
    let template = PromptTemplate::new("Summarize {what}");
    let variables = vars(&[("what", "this article")]);
    let prompt = template.create_with(&variables).unwrap();
    assert_eq!(prompt.messages().len(), 1);
    assert_eq!(prompt.messages()[0].content, "Summarize this article");
    assert_eq!(prompt.messages()[0].message_type, MessageType::User);
}

#[test]
fn test_rendering_is_idempotent() {
    let template = PromptTemplate::new("{a} and {b}");
    let variables = vars(&[("a", "x"), ("b", "y")]);
    let first = template.render_with(&variables).unwrap();
    let second = template.render_with(&variables).unwrap();
    assert_eq!(first, second);
    assert_eq!(template.template(), "{a} and {b}");
}

#[test]
fn test_file_sourced_template_behaves_like_inline() {
    let temp_file = std::env::temp_dir().join("genprompt_template_test.txt");
    std::fs::write(&temp_file, "From file: {value}").unwrap();

    let template = PromptTemplate::from_file(&temp_file).expect("template file should load");
    let rendered = template.render_with(&vars(&[("value", "ok")])).unwrap();

    let _ = std::fs::remove_file(&temp_file);

    assert_eq!(rendered, "From file: ok");
    assert_eq!(template.message_type(), MessageType::User);
}

#[test]
fn test_missing_template_file_is_an_io_error() {
    let missing = std::env::temp_dir().join("genprompt_no_such_template.txt");
    let err = PromptTemplate::from_file(&missing).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
