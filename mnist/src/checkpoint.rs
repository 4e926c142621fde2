use std::error::Error;
use std::path::PathBuf;

use candle_nn::VarMap;
use export::ExportError;

pub fn path(network: &str) -> PathBuf {
    PathBuf::from(format!("checkpoints/{}.safetensors", network))
}

pub fn save(varmap: &VarMap, network: &str) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all("checkpoints")?;
    varmap.save(&path(network))?;
    Ok(())
}

/// Fills an already-built varmap from a saved checkpoint.
pub fn load(varmap: &mut VarMap, network: &str) -> Result<(), ExportError> {
    let checkpoint_path = path(network);
    if !checkpoint_path.exists() {
        return Err(ExportError::MissingSource {
            path: checkpoint_path,
            reason: "Checkpoint not found, train the network first".to_string(),
        });
    }

    varmap
        .load(&checkpoint_path)
        .map_err(|e| ExportError::MissingSource {
            path: checkpoint_path,
            reason: e.to_string(),
        })?;

    Ok(())
}
