use super::*;
use std::ffi::{CStr, CString};
use std::ptr;

use cyrkana_core::Engine;

const PROFILES: &str = r#"[{"id":"rus_test","name_local":"テスト","name_default":"Test",
    "keyboardLayout":["А","К","Я"],"inputSchemaId":"schema_test"}]"#;
const KANA: &str = r#"{"a":"あ","ka":"か","kya":"きゃ"}"#;
const SCHEMA: &str = r#"{"А":{"kana_key":"a"},"КА":{"kana_key":"ka"},"КЯ":{"kana_key":"kya"},
    "ЖЁ":{"kana_key":"zyo"}}"#;

fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}

unsafe fn read(s: &CyrString) -> &str {
    assert!(!s.data.is_null());
    let text = CStr::from_ptr(s.data).to_str().unwrap();
    assert_eq!(text.len(), s.len);
    text
}

fn ready_engine() -> *mut Engine {
    let engine = cyr_engine_new();
    let (profiles, kana, id, schema) = (c(PROFILES), c(KANA), c("schema_test"), c(SCHEMA));
    assert_eq!(
        cyr_engine_init(engine, profiles.as_ptr(), kana.as_ptr()),
        CyrStatus::Ok
    );
    assert_eq!(
        cyr_engine_load_schema(engine, id.as_ptr(), schema.as_ptr()),
        CyrStatus::Ok
    );
    engine
}

fn press(engine: *mut Engine, buffer: &str, key: &str) -> CyrKeyResult {
    let (profile, buffer, key) = (c("rus_test"), c(buffer), c(key));
    cyr_engine_process_key(engine, profile.as_ptr(), buffer.as_ptr(), key.as_ptr())
}

#[test]
fn test_ffi_version() {
    let v = unsafe { CStr::from_ptr(cyr_version()) }.to_str().unwrap();
    assert_eq!(v, env!("CARGO_PKG_VERSION"));
    assert_eq!(v, cyrkana_core::VERSION);
    assert_eq!(VERSION_NUL.len(), v.len() + 1);
    // Same pointer on every call.
    assert_eq!(cyr_version(), cyr_version());
}

#[test]
fn test_ffi_compose_then_commit() {
    let engine = ready_engine();

    let r1 = press(engine, "", "К");
    assert_eq!(r1.status, CyrStatus::Ok);
    assert_eq!(r1.action, 1);
    let buffer = unsafe { read(&r1.buffer) }.to_string();
    assert_eq!(buffer, "К");
    assert_eq!(unsafe { read(&r1.output) }, "");
    assert!(r1.error.data.is_null());
    cyr_key_result_free(r1);

    let r2 = press(engine, &buffer, "Я");
    assert_eq!(r2.status, CyrStatus::Ok);
    assert_eq!(r2.action, 2);
    assert_eq!(unsafe { read(&r2.output) }, "きゃ");
    assert_eq!(unsafe { read(&r2.buffer) }, "");
    cyr_key_result_free(r2);

    let r3 = press(engine, "", "Щ");
    assert_eq!(r3.status, CyrStatus::Ok);
    assert_eq!(r3.action, 0);
    cyr_key_result_free(r3);

    cyr_engine_free(engine);
}

#[test]
fn test_ffi_error_statuses() {
    let engine = cyr_engine_new();

    let r = press(engine, "", "А");
    assert_eq!(r.status, CyrStatus::NotInitialized);
    assert_eq!(unsafe { read(&r.error) }, "engine not initialized");
    cyr_key_result_free(r);

    let (bad, kana) = (c("[{"), c(KANA));
    assert_eq!(
        cyr_engine_init(engine, bad.as_ptr(), kana.as_ptr()),
        CyrStatus::MalformedInput
    );
    let profiles = c(PROFILES);
    assert_eq!(
        cyr_engine_init(engine, profiles.as_ptr(), kana.as_ptr()),
        CyrStatus::Ok
    );
    assert_eq!(
        cyr_engine_init(engine, profiles.as_ptr(), kana.as_ptr()),
        CyrStatus::AlreadyInitialized
    );

    let r = press(engine, "", "А");
    assert_eq!(r.status, CyrStatus::SchemaNotLoaded);
    cyr_key_result_free(r);

    let (id, empty) = (c("schema_test"), c("{}"));
    assert_eq!(
        cyr_engine_load_schema(engine, id.as_ptr(), empty.as_ptr()),
        CyrStatus::EmptySchema
    );
    assert_eq!(cyr_engine_is_schema_loaded(engine, id.as_ptr()), 0);

    let schema = c(SCHEMA);
    assert_eq!(
        cyr_engine_load_schema(engine, id.as_ptr(), schema.as_ptr()),
        CyrStatus::Ok
    );
    assert_eq!(cyr_engine_is_schema_loaded(engine, id.as_ptr()), 1);

    let r = press(engine, "Ж", "Ё");
    assert_eq!(r.status, CyrStatus::MissingSyllableMapping);
    assert!(unsafe { read(&r.error) }.contains("zyo"));
    cyr_key_result_free(r);

    let (profile, key) = (c("nonexistent"), c("А"));
    let empty_buf = c("");
    let r = cyr_engine_process_key(engine, profile.as_ptr(), empty_buf.as_ptr(), key.as_ptr());
    assert_eq!(r.status, CyrStatus::ProfileNotFound);
    cyr_key_result_free(r);

    cyr_engine_free(engine);
}

#[test]
fn test_ffi_null_safety() {
    let key = c("А");
    let r = cyr_engine_process_key(ptr::null(), key.as_ptr(), key.as_ptr(), key.as_ptr());
    assert_eq!(r.status, CyrStatus::InvalidArgument);
    cyr_key_result_free(r);

    let engine = ready_engine();
    let r = cyr_engine_process_key(engine, ptr::null(), key.as_ptr(), key.as_ptr());
    assert_eq!(r.status, CyrStatus::InvalidArgument);
    cyr_key_result_free(r);

    assert_eq!(
        cyr_engine_init(engine, ptr::null(), key.as_ptr()),
        CyrStatus::InvalidArgument
    );
    assert_eq!(
        cyr_engine_load_schema(engine, ptr::null(), ptr::null()),
        CyrStatus::InvalidArgument
    );
    assert!(cyr_engine_profiles_json(ptr::null()).data.is_null());

    // Freeing null handles and strings is a no-op.
    cyr_engine_free(ptr::null_mut());
    cyr_string_free(CyrString::null());
    cyr_engine_free(engine);
}

#[test]
fn test_ffi_invalid_utf8() {
    let engine = ready_engine();
    let bad = CString::new(vec![0xff, 0xfe]).unwrap();
    let (profile, empty) = (c("rus_test"), c(""));
    let r = cyr_engine_process_key(engine, profile.as_ptr(), empty.as_ptr(), bad.as_ptr());
    assert_eq!(r.status, CyrStatus::InvalidArgument);
    cyr_key_result_free(r);
    cyr_engine_free(engine);
}

#[test]
fn test_ffi_profiles_json() {
    let engine = cyr_engine_new();
    assert!(cyr_engine_profiles_json(engine).data.is_null());
    cyr_engine_free(engine);

    let engine = ready_engine();
    let json = cyr_engine_profiles_json(engine);
    let value: serde_json::Value = serde_json::from_str(unsafe { read(&json) }).unwrap();
    assert_eq!(value[0]["id"], "rus_test");
    assert_eq!(value[0]["keyboardLayout"][1], "К");
    cyr_string_free(json);
    cyr_engine_free(engine);
}

#[test]
fn test_ffi_status_message() {
    let msg = unsafe { CStr::from_ptr(cyr_status_message(CyrStatus::ProfileNotFound as i32)) };
    assert_eq!(msg.to_str().unwrap(), "profile not found");
    let unknown = unsafe { CStr::from_ptr(cyr_status_message(-1)) };
    assert_eq!(unknown.to_str().unwrap(), "unknown status");
}
