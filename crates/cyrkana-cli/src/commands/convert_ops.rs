use std::process;

use serde::Serialize;

use cyrkana_core::{Action, Engine, EngineError};

use crate::assets::AssetDir;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// One keystroke of a replay, with the buffer it left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub key: String,
    pub action: Action,
    pub output: String,
    pub buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replay {
    pub steps: Vec<Step>,
    /// Concatenation of every committed output.
    pub text: String,
    /// Buffer still pending after the last keystroke.
    pub pending: String,
}

/// Feed `keys` through the engine the way a host would: each call receives
/// the buffer the previous one returned.
pub fn replay(engine: &Engine, profile_id: &str, keys: &[String]) -> Result<Replay, EngineError> {
    let mut buffer = String::new();
    let mut text = String::new();
    let mut steps = Vec::with_capacity(keys.len());
    for key in keys {
        let r = engine.process_key(profile_id, &buffer, key)?;
        text.push_str(&r.output);
        buffer.clone_from(&r.buffer);
        steps.push(Step {
            key: key.clone(),
            action: r.action,
            output: r.output,
            buffer: r.buffer,
        });
    }
    Ok(Replay {
        steps,
        text,
        pending: buffer,
    })
}

pub fn convert_cmd(assets: &AssetDir, profile_id: &str, keys: &[String], json: bool) {
    let engine = Engine::new();
    die!(assets.init(&engine), "Error loading assets: {}");
    die!(
        assets.load_schema_for(&engine, profile_id),
        "Error loading schema: {}"
    );
    let result = die!(replay(&engine, profile_id, keys), "Error: {}");

    if json {
        for step in &result.steps {
            let line = die!(serde_json::to_string(step), "Error: {}");
            println!("{line}");
        }
        return;
    }

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "{:>3}  {:<4} {:<9} output={:<6} buffer={}",
            i + 1,
            step.key,
            step.action.as_str(),
            step.output,
            step.buffer
        );
    }
    println!("text: {}", result.text);
    if !result.pending.is_empty() {
        println!("pending: {}", result.pending);
    }
}
