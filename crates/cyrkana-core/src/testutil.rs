//! Shared fixtures for unit tests.

use crate::kana::KanaTable;
use crate::schema::Schema;

pub(crate) const TEST_PROFILES: &str = r#"[
    {
        "id": "rus_test",
        "name_local": "ロシア語テスト",
        "name_default": "Russian Test",
        "keyboardLayout": ["А", "И", "У", "К", "Н", "Я", "Ж"],
        "inputSchemaId": "schema_test"
    },
    {
        "id": "rus_alt",
        "name_local": "ロシア語（別）",
        "name_default": "Russian Alt",
        "keyboardLayout": ["А", "К"],
        "inputSchemaId": "schema_test"
    },
    {
        "id": "srb_test",
        "name_local": "セルビア語テスト",
        "name_default": "Serbian Test",
        "keyboardLayout": ["Ћ", "А"],
        "inputSchemaId": "schema_srb"
    }
]"#;

pub(crate) const TEST_KANA: &str = r#"{
    "a": "あ",
    "i": "い",
    "u": "う",
    "ka": "か",
    "ki": "き",
    "ku": "く",
    "kya": "きゃ",
    "n": "ん",
    "na": "な",
    "chi": "ち"
}"#;

pub(crate) const TEST_SCHEMA: &str = r#"{
    "А": {"kana_key": "a"},
    "И": {"kana_key": "i"},
    "У": {"kana_key": "u"},
    "КА": {"kana_key": "ka"},
    "КИ": {"kana_key": "ki"},
    "КУ": {"kana_key": "ku"},
    "КЯ": {"kana_key": "kya"},
    "Н": {"kana_key": "n"},
    "НА": {"kana_key": "na"},
    "ЖЁ": {"kana_key": "zyo"}
}"#;

pub(crate) const TEST_SRB_SCHEMA: &str = r#"{
    "Ћ": {"kana_key": "chi"},
    "А": {"kana_key": "a"}
}"#;

pub(crate) fn test_schema() -> Schema {
    Schema::from_json("schema_test", TEST_SCHEMA).unwrap()
}

pub(crate) fn test_kana() -> KanaTable {
    KanaTable::from_json(TEST_KANA).unwrap()
}
