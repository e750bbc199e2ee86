use uuid::Uuid;

/// Fresh random (v4) identifier for a visitor row
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}
