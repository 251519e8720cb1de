use bauwerk_blocks::material::MaterialRegistry;
use bauwerk_blocks::shape::ShapeRegistry;
use bauwerk_blocks::types::{Block, MaterialId, ShapeId};
use proptest::prelude::*;

const SHAPES_TOML: &str = r#"
[[shapes]]
id = 0
name = "full"
display_name = "Full block"

[[shapes]]
id = 4
name = "post"
display_name = "Post"
size_x = 0.34
size_z = 0.34
stackable = true
climbable = true
"#;

const MATERIALS_TOML: &str = r#"
[[materials]]
id = 0
name = "air"
solid = false
density = 0.0

[[materials]]
id = 1
name = "stone"
display_name = "Stone"
color = [0.5, 0.5, 0.5, 1.0]
hardness = 3
"#;

#[test]
fn shape_registry_lookups() {
    let reg = ShapeRegistry::from_toml_str(SHAPES_TOML).expect("shapes");
    assert_eq!(reg.len(), 2);

    let full = reg.get(ShapeId(0)).expect("full by id");
    assert_eq!(full.name, "full");
    assert_eq!(full.extents(), (1.0, 1.0, 1.0));
    assert!(!full.stackable);

    let post = reg.get_by_name("post").expect("post by name");
    assert_eq!(post.id, ShapeId(4));
    assert!(post.stackable);
    assert!(post.climbable);
    assert!((post.size_x - 0.34).abs() < 1e-6);
    assert!((post.size_y - 1.0).abs() < 1e-6);

    assert!(reg.get(ShapeId(99)).is_none());
    assert!(reg.get_by_name("arch").is_none());
    assert_eq!(reg.id_by_name("post"), Some(ShapeId(4)));
    assert_eq!(reg.iter().count(), 2);
}

#[test]
fn shape_registry_clear_empties_both_indexes() {
    let mut reg = ShapeRegistry::from_toml_str(SHAPES_TOML).expect("shapes");
    reg.clear();
    assert_eq!(reg.len(), 0);
    assert!(reg.is_empty());
    assert!(reg.get(ShapeId(0)).is_none());
    assert!(reg.get_by_name("full").is_none());
}

#[test]
fn shape_id_defaults_to_next_free_index() {
    let reg = ShapeRegistry::from_toml_str(
        r#"
        [[shapes]]
        name = "first"

        [[shapes]]
        name = "second"
        size_y = 0.5
    "#,
    )
    .expect("shapes");
    assert_eq!(reg.id_by_name("first"), Some(ShapeId(0)));
    assert_eq!(reg.id_by_name("second"), Some(ShapeId(1)));
    // Display name falls back to the record name.
    assert_eq!(reg.get_by_name("second").unwrap().display_name, "second");
}

#[test]
fn material_registry_lookups() {
    let reg = MaterialRegistry::from_toml_str(MATERIALS_TOML).expect("materials");
    assert_eq!(reg.len(), 2);

    let air = reg.get(MaterialId::AIR).expect("air");
    assert!(!air.solid);
    let stone = reg.get_by_name("stone").expect("stone");
    assert_eq!(stone.id, MaterialId(1));
    assert_eq!(stone.hardness, 3);
    assert_eq!(stone.display_name, "Stone");
    // Unset fields take their defaults.
    assert_eq!(air.color, [1.0, 1.0, 1.0, 1.0]);
    assert!((stone.density - 1.0).abs() < 1e-6);
    assert!(reg.iter().any(|m| m.name == "air"));
}

#[test]
fn bad_toml_is_an_error_not_a_panic() {
    assert!(ShapeRegistry::from_toml_str("shapes = 3").is_err());
    assert!(MaterialRegistry::from_toml_str("[[materials]]\nid = 1").is_err());
}

#[test]
fn empty_material_marks_empty_block() {
    assert!(Block::EMPTY.is_empty());
    let b = Block::full(MaterialId(1), ShapeId(0));
    assert!(!b.is_empty());
    assert_eq!(b.sub(), (0, 0, 0));
}

proptest! {
    // Records without explicit ids are numbered in file order.
    #[test]
    fn auto_ids_are_sequential(count in 1usize..12) {
        let mut toml_src = String::new();
        for i in 0..count {
            toml_src.push_str(&format!("[[shapes]]\nname = \"s{}\"\n\n", i));
        }
        let reg = ShapeRegistry::from_toml_str(&toml_src).unwrap();
        prop_assert_eq!(reg.len(), count);
        for i in 0..count {
            prop_assert_eq!(reg.id_by_name(&format!("s{}", i)), Some(ShapeId(i as u16)));
        }
    }
}
