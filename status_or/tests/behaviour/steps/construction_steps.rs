//! Steps building containers and inspecting their state.

use crate::fixtures::ContainerContext;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then};
use status_or::{Status, StatusCode, StatusOr};
use test_helpers::matchers::{expect_code, expect_moved, expect_ok, expect_status};

#[given("a number container holding {value:i32}")]
fn number_holding(container_context: &ContainerContext, value: i32) {
    container_context.number.set(StatusOr::new(value));
}

#[given("a number container that failed with message {message}")]
fn number_failed(container_context: &ContainerContext, message: String) {
    container_context
        .number
        .set(StatusOr::from_status(Status::invalid_argument(message)));
}

#[given("a default text container")]
fn default_text(container_context: &ContainerContext) {
    container_context.first.set(StatusOr::default());
}

#[given("a text container holding {text}")]
fn text_holding(container_context: &ContainerContext, text: String) {
    container_context.first.set(StatusOr::new(text));
}

#[then("the number container holds {expected:i32}")]
fn number_holds(container_context: &ContainerContext, expected: i32) -> Result<()> {
    let number = container_context
        .number
        .get()
        .ok_or_else(|| anyhow!("number container unavailable"))?;
    expect_ok(&number)?;
    ensure!(*number.value() == expected, "expected {expected}, got {number:?}");
    Ok(())
}

#[then("the number container is not ok with message {message}")]
fn number_failed_with(container_context: &ContainerContext, message: String) -> Result<()> {
    let number = container_context
        .number
        .get()
        .ok_or_else(|| anyhow!("number container unavailable"))?;
    expect_code(&number, StatusCode::InvalidArgument)?;
    expect_status(&number, &Status::invalid_argument(message))
}

#[then("the first container reports the unknown status")]
fn first_unknown(container_context: &ContainerContext) -> Result<()> {
    let first = first(container_context)?;
    expect_status(&first, &Status::default())
}

#[then("the first container reports the moved-from marker")]
fn first_moved(container_context: &ContainerContext) -> Result<()> {
    expect_moved(&first(container_context)?)
}

#[then("the first container holds {text}")]
fn first_holds(container_context: &ContainerContext, text: String) -> Result<()> {
    holds(&first(container_context)?, &text)
}

#[then("the second container holds {text}")]
fn second_holds(container_context: &ContainerContext, text: String) -> Result<()> {
    let second = container_context
        .second
        .get()
        .ok_or_else(|| anyhow!("second container unavailable"))?;
    holds(&second, &text)
}

fn first(container_context: &ContainerContext) -> Result<StatusOr<String>> {
    container_context
        .first
        .get()
        .ok_or_else(|| anyhow!("first container unavailable"))
}

fn holds(container: &StatusOr<String>, text: &str) -> Result<()> {
    expect_ok(container)?;
    ensure!(container.value() == text, "expected {text}, got {container:?}");
    Ok(())
}
