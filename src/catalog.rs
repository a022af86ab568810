//! Static catalog: the products and posts the page views render.
//!
//! The shop has no backend, so its inventory ships with the app. Functions
//! return owned values; callers keep what they need.

use crate::models::{BlogPost, Category, PetType, Product};

/// Every product the shop sells.
pub fn products() -> Vec<Product> {
    fn item(
        id: u32,
        name: &str,
        category: Category,
        pet_type: PetType,
        price: f64,
        image: &str,
        description: &str,
        stock: u32,
    ) -> Product {
        Product {
            id,
            name: name.to_string(),
            category,
            pet_type,
            price,
            image: format!("/images/products/{image}"),
            description: description.to_string(),
            stock,
        }
    }

    vec![
        item(
            1,
            "Royal Feline Dry Food 2kg",
            Category::Food,
            PetType::Cat,
            18.5,
            "royal-feline-dry.jpg",
            "Complete dry food for adult cats, with salmon and brown rice. \
             Supports coat health and digestion.",
            34,
        ),
        item(
            2,
            "Puppy Power Kibble 5kg",
            Category::Food,
            PetType::Dog,
            32.0,
            "puppy-power-kibble.jpg",
            "High-protein kibble for growing dogs up to twelve months, \
             enriched with calcium and DHA.",
            22,
        ),
        item(
            3,
            "Salmon Pate Wet Food, 12 cans",
            Category::Food,
            PetType::Cat,
            24.9,
            "salmon-pate-cans.jpg",
            "Grain-free wet food made from wild-caught salmon. A dozen \
             85g cans per box.",
            18,
        ),
        item(
            4,
            "Goat Milk Drink 450ml",
            Category::Drink,
            PetType::Both,
            7.8,
            "goat-milk-drink.jpg",
            "Lactose-reduced goat milk for cats and dogs. Serve chilled \
             or over dry food.",
            40,
        ),
        item(
            5,
            "Electrolyte Hydration Gel",
            Category::Drink,
            PetType::Dog,
            11.25,
            "hydration-gel.jpg",
            "Fast-absorbing electrolyte gel for active dogs on hot days \
             and long walks.",
            0,
        ),
        item(
            6,
            "Flea & Tick Spot-On, 3 doses",
            Category::Medicine,
            PetType::Both,
            21.4,
            "flea-tick-spot-on.jpg",
            "Monthly spot-on treatment against fleas and ticks. One box \
             covers three months.",
            15,
        ),
        item(
            7,
            "Joint Care Chews, 60 count",
            Category::Medicine,
            PetType::Dog,
            19.99,
            "joint-care-chews.jpg",
            "Glucosamine and chondroitin chews for senior dogs and large \
             breeds.",
            27,
        ),
        item(
            8,
            "Hairball Relief Paste 100g",
            Category::Medicine,
            PetType::Cat,
            9.6,
            "hairball-paste.jpg",
            "Malt-based paste that helps hairballs pass naturally. Most \
             cats take it straight from the tube.",
            31,
        ),
        item(
            9,
            "Stainless Steel Bowl Set",
            Category::Supplies,
            PetType::Both,
            13.75,
            "steel-bowl-set.jpg",
            "Two rust-free bowls with non-slip bases, dishwasher safe.",
            45,
        ),
        item(
            10,
            "Cozy Cave Pet Bed, size M",
            Category::Supplies,
            PetType::Both,
            39.0,
            "cozy-cave-bed.jpg",
            "Hooded plush bed for pets up to 9kg. Machine-washable cover.",
            12,
        ),
        item(
            11,
            "Feather Teaser Wand",
            Category::Toys,
            PetType::Cat,
            6.5,
            "feather-teaser.jpg",
            "Spring-loaded wand with replaceable feather lures.",
            58,
        ),
        item(
            12,
            "Rope Tug Ring",
            Category::Toys,
            PetType::Dog,
            8.9,
            "rope-tug-ring.jpg",
            "Braided cotton ring for tug and fetch. Gentle on teeth, \
             tough on pulls.",
            36,
        ),
    ]
}

/// Posts for the blog pages, newest first.
pub fn blog_posts() -> Vec<BlogPost> {
    fn post(
        id: u32,
        title: &str,
        excerpt: &str,
        content: &str,
        author: &str,
        date: &str,
        image: &str,
    ) -> BlogPost {
        BlogPost {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            image: format!("/images/blog/{image}"),
        }
    }

    vec![
        post(
            1,
            "Winter Care Checklist for Cats and Dogs",
            "Shorter days and cold floors change what pets need. Six things \
             to adjust before the temperature drops.",
            "Cold weather asks more of joints, paws and coats. Start with \
             food: outdoor animals burn more calories in winter, while \
             indoor ones often need slightly less. Check sleeping spots for \
             drafts and lift beds off tiled floors. Wipe paws after walks \
             so road salt never gets licked off, and keep antifreeze locked \
             away; even a teaspoon is dangerous. Finally, senior pets \
             stiffen up in the cold, so shorter, more frequent walks beat \
             one long outing.",
            "Dr. Thu Nguyen",
            "2025-01-09",
            "winter-checklist.jpg",
        ),
        post(
            2,
            "Reading Pet Food Labels Like a Vet",
            "Marketing words on the front, facts on the back. How to judge \
             a bag of food in ninety seconds.",
            "Ignore the photography and go straight to the ingredient list. \
             Ingredients are ordered by weight, so a named meat in the \
             first two positions matters more than any slogan. 'Meal' is \
             not a bad word; rendered meal is concentrated protein. Then \
             find the analysis table and compare protein and fat against \
             your pet's age and activity, not against other bags. The \
             feeding guide is a starting point only; body condition is the \
             real check.",
            "Dr. Thu Nguyen",
            "2024-12-05",
            "food-labels.jpg",
        ),
        post(
            3,
            "How Much Exercise Does Your Dog Really Need?",
            "Breed, age and weather all move the number. A practical guide \
             to daily activity, from terriers to retrievers.",
            "A healthy adult dog needs somewhere between thirty minutes and \
             two hours of activity a day, and the spread is mostly breed. \
             Working and sporting breeds sit at the top of the range and do \
             best with a job: fetch with rules, scent games, structured \
             runs. Short-nosed breeds overheat quickly and should stay at \
             the low end in warm weather. Puppies follow the five-minute \
             rule per month of age, and with seniors watch the next \
             morning, not the walk itself.",
            "Minh Pham",
            "2024-11-18",
            "dog-exercise.jpg",
        ),
        post(
            4,
            "Bringing Home a New Kitten: The First Week",
            "The first seven days set the tone for years. A day-by-day plan \
             for a calm start.",
            "Set up one quiet room before the kitten arrives: litter tray \
             in a corner, food and water away from it, somewhere to hide, \
             something to scratch. Day one is only about that room. Let the \
             kitten explore at its own pace and resist the urge to carry it \
             around the house. From day three, open the door and let it \
             widen its own territory. Book the first vet visit within the \
             week, and keep feeding whatever the breeder or shelter used; \
             diet changes can wait until week two.",
            "Minh Pham",
            "2024-11-02",
            "new-kitten.jpg",
        ),
    ]
}

/// Look up a post by id. Detail views treat `None` as a stale selection.
pub fn blog_post_by_id(id: u32) -> Option<BlogPost> {
    blog_posts().into_iter().find(|post| post.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_product_ids_are_unique() {
        let products = products();
        let ids: HashSet<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_every_category_is_stocked() {
        let products = products();
        for category in Category::ALL {
            assert!(
                products.iter().any(|p| p.category == category),
                "no products in {}",
                category.label()
            );
        }
    }

    #[test]
    fn test_catalog_covers_cats_dogs_and_both() {
        let products = products();
        assert!(products.iter().any(|p| p.pet_type == PetType::Cat));
        assert!(products.iter().any(|p| p.pet_type == PetType::Dog));
        assert!(products.iter().any(|p| p.pet_type == PetType::Both));
    }

    #[test]
    fn test_at_least_one_product_is_out_of_stock() {
        assert!(products().iter().any(|p| !p.in_stock()));
    }

    #[test]
    fn test_blog_post_lookup() {
        let posts = blog_posts();
        let ids: HashSet<u32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());
        assert!(blog_post_by_id(1).is_some());
        assert!(blog_post_by_id(999).is_none());
    }
}
