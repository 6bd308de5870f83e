use super::*;
use serde_json::json;

#[test]
fn position_should_map_server_field_names() {
    let position: Position = serde_json::from_value(json!({
        "position_id": 1,
        "position_code": "MGR",
        "position_name": "Manager",
    }))
    .expect("position should deserialize");

    assert_eq!(position.id, 1);
    assert_eq!(position.code, "MGR");
    assert_eq!(position.name, "Manager");
}

#[test]
fn position_init_should_serialize_canonical_shape() {
    let init = PositionInit {
        code: "MGR".to_string(),
        name: "Manager".to_string(),
    };

    let payload = serde_json::to_value(&init).expect("payload should serialize");
    assert_eq!(payload, json!({ "code": "MGR", "name": "Manager" }));
}
