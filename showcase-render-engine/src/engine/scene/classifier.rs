use constants::classification::BODY_NAME_TOKENS;

/// Decide whether a scene node belongs to the paintable exterior shell.
///
/// Pure, case-insensitive substring containment over the node's own name and
/// its material's name (OR semantics). Nodes without a material name can only
/// match via their own name. Re-evaluated on every traversal; classification
/// is never cached across loaded scenes.
pub fn is_body_mesh(node_name: &str, material_name: Option<&str>) -> bool {
    matches_vocabulary(node_name) || material_name.is_some_and(matches_vocabulary)
}

fn matches_vocabulary(name: &str) -> bool {
    let name = name.to_lowercase();
    BODY_NAME_TOKENS.iter().any(|token| name.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_meshes_match_by_node_name() {
        assert!(is_body_mesh("Body_Paint_01", None));
        assert!(is_body_mesh("carpaint_base.002", None));
        assert!(is_body_mesh("EXTERIOR_shell_left", None));
    }

    #[test]
    fn non_body_meshes_do_not_match() {
        assert!(!is_body_mesh("wheel_rim_left", None));
        assert!(!is_body_mesh("glass_windshield", None));
        assert!(!is_body_mesh("interior_trim_dash", None));
        assert!(!is_body_mesh("brakedisk_front", None));
    }

    #[test]
    fn material_name_alone_classifies() {
        assert!(is_body_mesh("mesh_012", Some("carpaint_base")));
        assert!(is_body_mesh("node_7", Some("Paint.001")));
        assert!(!is_body_mesh("mesh_012", Some("chrome_trim")));
    }

    #[test]
    fn missing_material_name_never_matches_via_material_path() {
        assert!(!is_body_mesh("wheel_rim_left", None));
        assert!(is_body_mesh("wheel_rim_left", Some("carpaint")));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_body_mesh("CARPAINT", None));
        assert!(is_body_mesh("ShElL_03", None));
    }
}
