use std::ffi::c_char;

use cyrkana_core::{Action, ConversionResult, Engine, EngineError};

use super::{ffi_catch, ffi_close, ffi_guard, owned_new, CyrStatus, CyrString};

// --- Engine handle FFI ---

#[no_mangle]
pub extern "C" fn cyr_engine_new() -> *mut Engine {
    owned_new(Engine::new())
}

ffi_close!(cyr_engine_free, Engine);

#[no_mangle]
pub extern "C" fn cyr_engine_init(
    engine: *const Engine,
    profiles_json: *const c_char,
    kana_json: *const c_char,
) -> CyrStatus {
    ffi_catch(CyrStatus::Panic, || {
        ffi_guard!(CyrStatus::InvalidArgument;
            ref: engine   = engine,
            str: profiles = profiles_json,
            str: kana     = kana_json,
        );
        engine.init(profiles, kana).into()
    })
}

#[no_mangle]
pub extern "C" fn cyr_engine_load_schema(
    engine: *const Engine,
    schema_id: *const c_char,
    schema_json: *const c_char,
) -> CyrStatus {
    ffi_catch(CyrStatus::Panic, || {
        ffi_guard!(CyrStatus::InvalidArgument;
            ref: engine = engine,
            str: id     = schema_id,
            str: blob   = schema_json,
        );
        engine.load_schema(id, blob).into()
    })
}

#[no_mangle]
pub extern "C" fn cyr_engine_is_schema_loaded(
    engine: *const Engine,
    schema_id: *const c_char,
) -> u8 {
    ffi_catch(0, || {
        ffi_guard!(0;
            ref: engine = engine,
            str: id     = schema_id,
        );
        engine.is_schema_loaded(id) as u8
    })
}

// --- Key processing FFI ---

/// Result of one keystroke.
/// action: 0=clear, 1=composing, 2=commit (meaningful only when status is Ok).
#[repr(C)]
pub struct CyrKeyResult {
    pub status: CyrStatus,
    pub action: u8,
    pub output: CyrString,
    pub buffer: CyrString,
    /// Error description when `status` is not Ok.
    pub error: CyrString,
}

impl CyrKeyResult {
    fn failed(status: CyrStatus) -> Self {
        Self {
            status,
            action: 0,
            output: CyrString::null(),
            buffer: CyrString::null(),
            error: CyrString::null(),
        }
    }

    fn from_result(result: Result<ConversionResult, EngineError>) -> Self {
        match result {
            Ok(r) => Self {
                status: CyrStatus::Ok,
                action: match r.action {
                    Action::Clear => 0,
                    Action::Composing => 1,
                    Action::Commit => 2,
                },
                output: CyrString::new(&r.output),
                buffer: CyrString::new(&r.buffer),
                error: CyrString::null(),
            },
            Err(e) => Self {
                error: CyrString::new(&e.to_string()),
                ..Self::failed((&e).into())
            },
        }
    }
}

#[no_mangle]
pub extern "C" fn cyr_engine_process_key(
    engine: *const Engine,
    profile_id: *const c_char,
    buffer: *const c_char,
    key: *const c_char,
) -> CyrKeyResult {
    ffi_catch(CyrKeyResult::failed(CyrStatus::Panic), || {
        ffi_guard!(CyrKeyResult::failed(CyrStatus::InvalidArgument);
            ref: engine  = engine,
            str: profile = profile_id,
            str: buffer  = buffer,
            str: key     = key,
        );
        CyrKeyResult::from_result(engine.process_key(profile, buffer, key))
    })
}

#[no_mangle]
pub extern "C" fn cyr_key_result_free(result: CyrKeyResult) {
    unsafe {
        result.output.release();
        result.buffer.release();
        result.error.release();
    }
}

// --- Profile listing FFI ---

/// All profiles as a JSON array. Null if the engine is not initialized.
#[no_mangle]
pub extern "C" fn cyr_engine_profiles_json(engine: *const Engine) -> CyrString {
    ffi_catch(CyrString::null(), || {
        ffi_guard!(CyrString::null();
            ref: engine = engine,
        );
        let Ok(profiles) = engine.profiles() else {
            return CyrString::null();
        };
        match serde_json::to_string(&profiles) {
            Ok(json) => CyrString::new(&json),
            Err(_) => CyrString::null(),
        }
    })
}
