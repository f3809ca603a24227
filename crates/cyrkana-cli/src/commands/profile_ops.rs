use std::process;

use cyrkana_core::settings::settings;

use crate::assets::AssetDir;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn profiles_cmd(assets: &AssetDir, json: bool) {
    let engine = cyrkana_core::Engine::new();
    die!(assets.init(&engine), "Error loading assets: {}");
    let profiles = die!(engine.profiles(), "Error: {}");

    if json {
        let out = die!(serde_json::to_string_pretty(&profiles), "Error: {}");
        println!("{out}");
        return;
    }

    let default_id = engine.default_profile().map(|p| p.id).ok();
    for p in &profiles {
        let marker = if default_id.as_deref() == Some(p.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {:<16} {:<16} {} keys  {} / {}",
            p.id,
            p.input_schema_id,
            p.keyboard_layout.len(),
            p.name_default,
            p.name_local
        );
    }
    if default_id.as_deref() != Some(settings().profiles.default.as_str()) {
        eprintln!(
            "note: configured default profile {:?} is not registered",
            settings().profiles.default
        );
    }
}
