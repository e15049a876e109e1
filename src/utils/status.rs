/// Log statuses outside the suggested set for an entity.
///
/// Status fields stay free-form; this only makes unusual values visible.
pub fn note_unknown_status(entity: &str, status: &str, known: &[&str]) {
    if !known.contains(&status) {
        tracing::warn!(entity = %entity, status = %status, "Status outside the suggested set");
    }
}
