use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata for version/long-version output
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
