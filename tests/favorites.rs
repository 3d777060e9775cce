//! Favorites file behavior end to end.

use keittio::{Favorite, Favorites};

fn favorite(id: i64, name: &str) -> Favorite {
    Favorite {
        customer_id: "12345".to_string(),
        kitchen_id: id,
        kitchen_name: name.to_string(),
    }
}

#[test]
fn star_save_reload_unstar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.json");

    let mut favorites = Favorites::load(&path).unwrap();
    assert!(favorites.is_empty());
    favorites.star(favorite(101, "Keskuskeittiö"));
    favorites.star(favorite(201, "Lyseon ruokala"));
    favorites.save().unwrap();

    let mut reloaded = Favorites::load(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.unstar(101).unwrap().kitchen_name, "Keskuskeittiö");
    reloaded.save().unwrap();

    let after = Favorites::load(&path).unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after.iter().next().unwrap().kitchen_id, 201);
}

#[test]
fn file_is_human_editable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.json");

    let mut favorites = Favorites::load(&path).unwrap();
    favorites.star(favorite(101, "Keskuskeittiö"));
    favorites.save().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    // Pretty-printed, with the fields a user would expect to edit.
    assert!(text.contains('\n'));
    assert!(text.contains("\"kitchen_id\": 101"));
    assert!(text.contains("Keskuskeittiö"));
}
