//! # Built-in Scene Edits
//!
//! The two hardcoded anchor/block pairs applied to the player scene: a gun
//! attachment point under the right arm, and an `AnimationTree` next to the
//! existing `AnimationPlayer`. Anchors are matched verbatim, including
//! whitespace and the `SubResource` identifiers, so they only line up with
//! the known-good scene they were written against.

/// Default location of the player scene, relative to the Godot project root.
pub const DEFAULT_SCENE_PATH: &str = "Scenes/player.tscn";

/// A named insertion: a literal anchor fragment and the block placed
/// immediately after it.
#[derive(Debug, Clone, Copy)]
pub struct SceneEdit {
    /// Short label used in progress output.
    pub name: &'static str,
    /// Literal text locating the insertion point.
    pub anchor: &'static str,
    /// Literal text inserted after the anchor, separated by a blank line.
    pub block: &'static str,
}

const GUN_ATTACHMENT: SceneEdit = SceneEdit {
    name: "gun attachment",
    anchor: r#"[node name="arm-right" type="MeshInstance3D" parent="CharacterBody3D/Skeleton3D/arm-right"]
mesh = SubResource("ArrayMesh_0mbce")
skeleton = NodePath("")"#,
    block: r#"[node name="GunAttachPoint" type="Marker3D" parent="CharacterBody3D/Skeleton3D/arm-right"]
transform = Transform3D(1, 0, 0, 0, 1, 0, 0, 0, 1, 0, -0.2, 0)

[node name="Gun" parent="CharacterBody3D/Skeleton3D/arm-right/GunAttachPoint" instance=ExtResource("2_6t5aa")]"#,
};

const ANIMATION_TREE: SceneEdit = SceneEdit {
    name: "animation tree",
    anchor: r#"[node name="AnimationPlayer" type="AnimationPlayer" parent="CharacterBody3D"]
libraries = {
&"": SubResource("AnimationLibrary_eo808")
}"#,
    block: r#"[node name="AnimationTree" type="AnimationTree" parent="CharacterBody3D"]
anim_player = NodePath("../AnimationPlayer")"#,
};

static EDITS: [SceneEdit; 2] = [GUN_ATTACHMENT, ANIMATION_TREE];

/// Returns the built-in player-scene edits in application order.
pub fn player_scene_edits() -> &'static [SceneEdit] {
    &EDITS
}
