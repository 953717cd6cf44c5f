use crate::config::MachineConfig;
use crate::error::Result;
use crate::transcript::Transcript;
use std::path::{Path, PathBuf};

/// Options for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rotor catalog; the built-in catalog when `None`
    pub config: Option<PathBuf>,
    /// Keep spaces in place instead of five-letter groups
    pub raw: bool,
}

/// Run settings and message lines in `input` through a fresh machine
pub fn convert_text(input: &str, options: &ConvertOptions) -> Result<String> {
    let config = MachineConfig::load_or_builtin(options.config.as_deref())?;
    let mut machine = config.build_machine()?;
    let mut transcript = Transcript::new(&mut machine, options.raw);

    let mut output = String::new();
    for line in transcript.process(input)? {
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}

/// Convert `input_path`, writing to `output_path` when given.
/// Returns the converted text.
pub fn convert_file(
    input_path: &Path,
    output_path: Option<&Path>,
    options: &ConvertOptions,
) -> Result<String> {
    let input = std::fs::read_to_string(input_path)?;
    let output = convert_text(&input, options)?;

    if let Some(path) = output_path {
        std::fs::write(path, &output)?;
        log::info!("Wrote {} bytes to {}", output.len(), path.display());
    }
    Ok(output)
}
