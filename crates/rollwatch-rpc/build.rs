use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    tonic_build::configure()
        // Descriptor set feeds the server reflection endpoint.
        .file_descriptor_set_path(out_dir.join("rollwatch_descriptor.bin"))
        .compile_protos(&["proto/rollwatch/v1/deployment.proto"], &["proto"])?;

    Ok(())
}
