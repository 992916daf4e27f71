//! Steps copying and moving container contents.

use crate::fixtures::ContainerContext;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{then, when};
use status_or::StatusOr;

fn take_first(container_context: &ContainerContext) -> Result<StatusOr<String>> {
    container_context
        .first
        .take()
        .ok_or_else(|| anyhow!("first container unavailable"))
}

#[when("the first container is moved into a second container")]
fn move_into_second(container_context: &ContainerContext) -> Result<()> {
    let mut first = take_first(container_context)?;
    let second = first.take();
    container_context.first.set(first);
    container_context.second.set(second);
    Ok(())
}

#[when("the first container is copied into a second container")]
fn copy_into_second(container_context: &ContainerContext) -> Result<()> {
    let first = take_first(container_context)?;
    container_context.second.set(first.clone());
    container_context.first.set(first);
    Ok(())
}

#[when("the first container is moved into itself")]
fn move_into_itself(container_context: &ContainerContext) -> Result<()> {
    let mut first = take_first(container_context)?;
    first = first.take();
    container_context.first.set(first);
    Ok(())
}

#[when("the value is moved out of the first container")]
fn move_value_out(container_context: &ContainerContext) -> Result<()> {
    let mut first = take_first(container_context)?;
    let value = first.try_take_value()?;
    container_context.first.set(first);
    container_context.extracted.set(value);
    Ok(())
}

#[then("the extracted text is {expected}")]
fn extracted_is(container_context: &ContainerContext, expected: String) -> Result<()> {
    let extracted = container_context
        .extracted
        .get()
        .ok_or_else(|| anyhow!("no value was extracted"))?;
    ensure!(extracted == expected, "expected {expected}, got {extracted}");
    Ok(())
}
