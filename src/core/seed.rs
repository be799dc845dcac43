//! Dishes the menu starts with.
//!
//! Either the built-in sample menu or a JSON seed file. Seed prices are
//! taken as-is; the statistics treat anything unparseable as zero.

use super::course::Course;
use super::dish::{DishId, DishRecord, PLACEHOLDER_IMAGE};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

static SAMPLE_MENU: Lazy<Vec<DishRecord>> = Lazy::new(|| {
    vec![
        DishRecord {
            id: DishId::new("starter-1"),
            dish_name: "Garlic Butter Shrimp".to_string(),
            description: "Juicy shrimp sautéed in garlic butter sauce.".to_string(),
            course: Course::Starters,
            price: "80".to_string(),
            image: "https://media.istockphoto.com/id/182033707/photo/shrimp-scampi.jpg?s=612x612&w=0&k=20&c=sXCyAmVOIG9866CDbDdgxI_438eV2QHfakwDqqgxgzA=".to_string(),
        },
        DishRecord {
            id: DishId::new("main-1"),
            dish_name: "Grilled Ribeye Steak".to_string(),
            description: "Tender steak grilled to perfection with herbs and love.".to_string(),
            course: Course::Mains,
            price: "165".to_string(),
            image: "https://media.istockphoto.com/id/587207508/photo/sliced-grilled-steak-ribeye-with-herb-butter.jpg?s=612x612&w=0&k=20&c=gm6Kg6rHYH0xWTF5oszm6NZ-hp9aPRbk9V1kvCr8MQI=".to_string(),
        },
        DishRecord {
            id: DishId::new("dessert-1"),
            dish_name: "Chocolate Cake".to_string(),
            description: "Warm chocolate cake with molten center and custard.".to_string(),
            course: Course::Dessert,
            price: "120".to_string(),
            image: "https://img.freepik.com/free-photo/front-view-delicious-cake-with-copy-space_23-2148769299.jpg".to_string(),
        },
    ]
});

/// The three built-in sample dishes.
pub fn sample_menu() -> Vec<DishRecord> {
    SAMPLE_MENU.clone()
}

/// One entry of a seed file, before the course is checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEntry {
    #[serde(default)]
    id: Option<String>,
    dish_name: String,
    description: String,
    course: String,
    price: String,
    #[serde(default)]
    image: Option<String>,
}

/// Load dishes from a JSON seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<DishRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed menu {}", path.display()))?;
    parse_seed(&content).with_context(|| format!("Invalid seed menu {}", path.display()))
}

/// Parse seed JSON.
///
/// Entries with an unknown course or an already used id are skipped.
/// Entries without an id get a generated one.
pub fn parse_seed(json: &str) -> Result<Vec<DishRecord>> {
    let entries: Vec<SeedEntry> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    let mut dishes = Vec::with_capacity(entries.len());

    for entry in entries {
        let course = match entry.course.parse::<Course>() {
            Ok(course) => course,
            Err(e) => {
                log::warn!("Skipping seed dish '{}': {}", entry.dish_name, e);
                continue;
            }
        };

        let id = entry.id.map(DishId::new).unwrap_or_else(DishId::generate);
        if !seen.insert(id.clone()) {
            log::warn!("Skipping seed dish '{}': duplicate id {}", entry.dish_name, id);
            continue;
        }

        dishes.push(DishRecord {
            id,
            dish_name: entry.dish_name,
            description: entry.description,
            course,
            price: entry.price,
            image: entry.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        });
    }

    Ok(dishes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::aggregate;

    #[test]
    fn test_sample_menu() {
        let menu = sample_menu();
        assert_eq!(menu.len(), 3);
        let courses: Vec<Course> = menu.iter().map(|d| d.course).collect();
        assert_eq!(courses, Course::ALL.to_vec());

        let stats = aggregate(&menu);
        assert_eq!(stats.average_label(Course::Starters), "80.00");
        assert_eq!(stats.average_label(Course::Mains), "165.00");
        assert_eq!(stats.average_label(Course::Dessert), "120.00");
    }

    #[test]
    fn test_parse_seed() {
        let json = r#"[
            {"id": "s1", "dishName": "Bruschetta", "description": "Tomato toast", "course": "Starters", "price": "45"},
            {"dishName": "Lamb", "description": "Slow roasted", "course": "Mains", "price": "190", "image": "lamb.png"}
        ]"#;
        let dishes = parse_seed(json).unwrap();
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].id.as_str(), "s1");
        assert_eq!(dishes[0].image, PLACEHOLDER_IMAGE);
        assert_eq!(dishes[1].course, Course::Mains);
        assert_eq!(dishes[1].image, "lamb.png");
        assert!(dishes[1].id.as_str().starts_with("custom-"));
    }

    #[test]
    fn test_parse_seed_skips_unknown_course_and_duplicates() {
        let json = r#"[
            {"id": "a", "dishName": "Wine", "description": "Red", "course": "Drinks", "price": "60"},
            {"id": "b", "dishName": "Soup", "description": "Hot", "course": "starters", "price": "50"},
            {"id": "c", "dishName": "Tart", "description": "Lemon", "course": "Dessert", "price": "40"},
            {"id": "c", "dishName": "Pie", "description": "Apple", "course": "Dessert", "price": "35"}
        ]"#;
        let dishes = parse_seed(json).unwrap();
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].dish_name, "Tart");
    }

    #[test]
    fn test_parse_seed_keeps_malformed_price() {
        let json = r#"[{"dishName": "Special", "description": "Ask", "course": "Mains", "price": "market"}]"#;
        let dishes = parse_seed(json).unwrap();
        assert_eq!(dishes[0].price, "market");
        assert_eq!(aggregate(&dishes).average_label(Course::Mains), "0.00");
    }

    #[test]
    fn test_parse_seed_rejects_bad_json() {
        assert!(parse_seed("{not json").is_err());
    }

    #[test]
    fn test_load_missing_seed_file() {
        assert!(load_seed_file(Path::new("/definitely/not/here.json")).is_err());
    }
}
