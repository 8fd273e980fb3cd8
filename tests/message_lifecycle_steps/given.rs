//! Given steps for message lifecycle BDD scenarios.

use super::when::post_content;
use super::world::MessageWorld;
use axum::http::StatusCode;
use rstest_bdd_macros::given;

#[given("an empty message service")]
fn empty_message_service(world: &mut MessageWorld) {
    *world = MessageWorld::new();
}

#[given(r#"a message with content "{content}" has been created"#)]
fn message_has_been_created(world: &mut MessageWorld, content: String) -> Result<(), eyre::Report> {
    post_content(world, &content)?;
    let status = world.last()?.status;
    eyre::ensure!(
        status == StatusCode::CREATED,
        "expected setup create to return 201, got {status}"
    );
    Ok(())
}
