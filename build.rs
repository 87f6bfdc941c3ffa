//! Retrieves information about the version of the game from Git and the build
//! environment. It is accessed at runtime through the generated `build`
//! module.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
