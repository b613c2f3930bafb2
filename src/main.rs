//! Container entrypoint for the static-files algorithm image.
//!
//! The node mounts a task input file and expects the result in the output
//! file; both paths arrive as environment variables. Anything written to the
//! output file is encrypted and returned to the server by the node, outside
//! this process.

use v6_static_files::{dispatch, logger, RpcRequest, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(settings))
}

async fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let input_path = settings
        .input_file
        .clone()
        .ok_or("INPUT_FILE is not set")?;
    let output_path = settings
        .output_file
        .clone()
        .ok_or("OUTPUT_FILE is not set")?;

    logger::info(&format!("Reading task input from {input_path}"));
    let raw = tokio::fs::read(&input_path).await?;
    let request: RpcRequest = serde_json::from_slice(&raw)?;

    logger::info(&format!("Dispatching method: {}", request.method));
    let reply = match dispatch(&settings, &request).await {
        Ok(reply) => reply,
        Err(err) => {
            logger::error(&format!("Task failed: {err}"));
            return Err(err.into());
        }
    };

    logger::info("Writing contents to output file");
    tokio::fs::write(&output_path, serde_json::to_vec(&reply)?).await?;

    Ok(())
}
