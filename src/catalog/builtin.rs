use crate::models::MealCatalogEntry;

/// Curated dishes with per-serving ingredient quantities.
pub(crate) fn entries() -> Vec<MealCatalogEntry> {
    let meal = MealCatalogEntry::new;
    vec![
        // Italian
        meal(
            "Lasagna",
            "Italian",
            &[
                ("Lasagna Noodles", 0.5),
                ("Ground Beef", 1.0),
                ("Ricotta", 0.5),
                ("Mozzarella", 0.5),
                ("Tomato Sauce", 1.0),
                ("Onions", 0.5),
            ],
        ),
        meal(
            "Pepperoni Pizza",
            "Italian",
            &[
                ("Pizza Dough", 1.0),
                ("Mozzarella", 0.5),
                ("Pepperoni", 0.25),
                ("Tomato Sauce", 0.5),
            ],
        ),

        // Asian
        meal(
            "Pad Thai",
            "Asian",
            &[
                ("Rice Noodles", 0.5),
                ("Shrimp", 0.5),
                ("Eggs", 2.0),
                ("Bean Sprouts", 0.5),
                ("Peanuts", 0.1),
                ("Lime", 1.0),
            ],
        ),
        meal(
            "Orange Chicken",
            "Asian",
            &[
                ("Chicken Breast", 1.0),
                ("Orange Juice", 0.25),
                ("Soy Sauce", 0.05),
                ("Rice", 1.0),
                ("Cornstarch", 0.05),
            ],
        ),
        meal(
            "General Tso's",
            "Asian",
            &[
                ("Chicken Breast", 1.0),
                ("Soy Sauce", 0.05),
                ("Ginger", 0.02),
                ("Garlic", 0.02),
                ("Rice", 1.0),
                ("Cornstarch", 0.05),
            ],
        ),
        meal(
            "Chicken Curry",
            "Asian",
            &[
                ("Chicken Breast", 1.0),
                ("Curry Powder", 0.02),
                ("Coconut Milk", 0.5),
                ("Onions", 0.5),
                ("Potatoes", 1.0),
                ("Rice", 1.0),
            ],
        ),
        meal(
            "Ramen",
            "Asian",
            &[
                ("Ramen Noodles", 0.5),
                ("Eggs", 2.0),
                ("Pork", 0.5),
                ("Green Onions", 0.25),
                ("Soy Sauce", 0.05),
            ],
        ),
        meal(
            "Chicken Lo Mein",
            "Asian",
            &[
                ("Chicken Breast", 0.75),
                ("Egg Noodles", 0.5),
                ("Bell Peppers", 1.0),
                ("Carrots", 0.5),
                ("Soy Sauce", 0.05),
            ],
        ),
        meal(
            "Shrimp Fried Rice",
            "Asian",
            &[
                ("Shrimp", 0.5),
                ("Rice", 2.0),
                ("Eggs", 2.0),
                ("Soy Sauce", 0.05),
                ("Peas", 0.5),
                ("Carrots", 0.5),
            ],
        ),
        meal(
            "Mongolian Beef",
            "Asian",
            &[
                ("Beef Steak", 1.0),
                ("Soy Sauce", 0.05),
                ("Brown Sugar", 0.05),
                ("Garlic", 0.02),
                ("Rice", 1.0),
            ],
        ),

        // Mexican
        meal(
            "Chicken Tacos",
            "Mexican",
            &[
                ("Chicken Breast", 1.0),
                ("Tortillas", 8.0),
                ("Tomatoes", 2.0),
                ("Lettuce", 0.5),
                ("Cheese", 0.25),
                ("Onions", 0.5),
                ("Salsa", 0.25),
            ],
        ),
        meal(
            "Fish Tacos",
            "Mexican",
            &[
                ("White Fish", 1.0),
                ("Tortillas", 8.0),
                ("Cabbage", 0.5),
                ("Lime", 2.0),
                ("Sour Cream", 0.25),
                ("Salsa", 0.25),
            ],
        ),
        meal(
            "Chicken Fajitas",
            "Mexican",
            &[
                ("Chicken Breast", 1.0),
                ("Bell Peppers", 2.0),
                ("Onions", 1.0),
                ("Tortillas", 6.0),
                ("Sour Cream", 0.25),
            ],
        ),

        // American
        meal(
            "Hamburgers",
            "American",
            &[
                ("Ground Beef", 1.0),
                ("Hamburger Buns", 4.0),
                ("Lettuce", 0.5),
                ("Tomatoes", 2.0),
                ("Onions", 0.5),
                ("Pickles", 0.25),
                ("Cheese", 0.25),
            ],
        ),
        meal(
            "Buffalo Wings",
            "American",
            &[
                ("Chicken Wings", 2.0),
                ("Hot Sauce", 0.25),
                ("Butter", 0.25),
                ("Celery", 1.0),
                ("Blue Cheese", 0.25),
            ],
        ),
        meal(
            "Mac and Cheese",
            "American",
            &[
                ("Macaroni", 0.5),
                ("Cheddar Cheese", 0.5),
                ("Milk", 0.5),
                ("Butter", 0.25),
                ("Flour", 0.1),
            ],
        ),
        meal(
            "BBQ Chicken",
            "American",
            &[
                ("Chicken", 1.5),
                ("BBQ Sauce", 0.5),
                ("Corn", 2.0),
                ("Potatoes", 2.0),
            ],
        ),
        meal(
            "Fried Chicken",
            "American",
            &[
                ("Chicken", 1.5),
                ("Flour", 0.5),
                ("Eggs", 2.0),
                ("Bread Crumbs", 0.5),
                ("Potatoes", 2.0),
            ],
        ),
        meal(
            "Beef Stew",
            "American",
            &[
                ("Beef Steak", 1.0),
                ("Potatoes", 2.0),
                ("Carrots", 1.0),
                ("Onions", 0.5),
                ("Beef Broth", 1.0),
            ],
        ),
        meal(
            "Hot Dogs",
            "American",
            &[
                ("Hot Dogs", 4.0),
                ("Hot Dog Buns", 4.0),
                ("Ketchup", 0.25),
                ("Mustard", 0.25),
                ("Onions", 0.5),
            ],
        ),
        meal(
            "Pulled Pork",
            "American",
            &[
                ("Pork Shoulder", 1.5),
                ("BBQ Sauce", 0.5),
                ("Hamburger Buns", 4.0),
                ("Coleslaw", 0.5),
            ],
        ),
        meal(
            "Meatloaf",
            "American",
            &[
                ("Ground Beef", 1.5),
                ("Bread Crumbs", 0.25),
                ("Eggs", 1.0),
                ("Onions", 0.5),
                ("Ketchup", 0.25),
                ("Potatoes", 2.0),
            ],
        ),
        meal(
            "Chili",
            "American",
            &[
                ("Ground Beef", 1.0),
                ("Kidney Beans", 1.0),
                ("Tomatoes", 2.0),
                ("Onions", 0.5),
                ("Chili Powder", 0.02),
            ],
        ),
        meal(
            "Grilled Cheese",
            "American",
            &[
                ("Bread", 4.0),
                ("Cheddar Cheese", 0.5),
                ("Butter", 0.25),
            ],
        ),
        meal(
            "Chicken Noodle Soup",
            "American",
            &[
                ("Chicken", 0.5),
                ("Egg Noodles", 0.5),
                ("Carrots", 1.0),
                ("Celery", 1.0),
                ("Chicken Broth", 1.0),
                ("Onions", 0.5),
            ],
        ),
        meal(
            "French Onion Soup",
            "American",
            &[
                ("Onions", 3.0),
                ("Beef Broth", 1.0),
                ("Butter", 0.25),
                ("Bread", 2.0),
                ("Swiss Cheese", 0.5),
            ],
        ),
        meal(
            "Tomato Soup",
            "American",
            &[
                ("Tomatoes", 4.0),
                ("Onions", 0.5),
                ("Garlic", 0.02),
                ("Heavy Cream", 0.25),
                ("Basil", 0.05),
            ],
        ),
        meal(
            "BLT",
            "American",
            &[
                ("Bacon", 0.5),
                ("Bread", 4.0),
                ("Lettuce", 0.5),
                ("Tomatoes", 2.0),
                ("Mayonnaise", 0.25),
            ],
        ),
        meal(
            "Reuben Sandwich",
            "American",
            &[
                ("Rye Bread", 4.0),
                ("Corned Beef", 1.0),
                ("Swiss Cheese", 0.5),
                ("Sauerkraut", 0.5),
                ("Thousand Island", 0.25),
            ],
        ),
        meal(
            "Philly Cheese Steak",
            "American",
            &[
                ("Ribeye Steak", 1.0),
                ("Hoagie Rolls", 2.0),
                ("Provolone", 0.5),
                ("Onions", 0.5),
                ("Bell Peppers", 0.5),
            ],
        ),
        meal(
            "Apple Pie",
            "American",
            &[
                ("Apples", 6.0),
                ("Flour", 0.5),
                ("Butter", 0.25),
                ("Sugar", 0.25),
                ("Cinnamon", 0.02),
            ],
        ),
        meal(
            "BBQ Ribs",
            "American",
            &[
                ("Pork Ribs", 2.0),
                ("BBQ Sauce", 0.5),
                ("Brown Sugar", 0.1),
                ("Corn", 2.0),
            ],
        ),
        meal(
            "Clam Chowder",
            "American",
            &[
                ("Clams", 1.0),
                ("Potatoes", 2.0),
                ("Bacon", 0.25),
                ("Onions", 0.5),
                ("Heavy Cream", 0.5),
            ],
        ),
        meal(
            "Cornbread",
            "American",
            &[
                ("Cornmeal", 0.5),
                ("Flour", 0.25),
                ("Eggs", 2.0),
                ("Milk", 0.5),
                ("Butter", 0.25),
            ],
        ),
        meal(
            "Deep-Dish Pizza",
            "American",
            &[
                ("Pizza Dough", 1.5),
                ("Mozzarella", 1.0),
                ("Sausage", 0.5),
                ("Tomato Sauce", 1.0),
                ("Parmesan", 0.25),
            ],
        ),
        meal(
            "Jambalaya",
            "American",
            &[
                ("Rice", 2.0),
                ("Chicken", 1.0),
                ("Sausage", 0.5),
                ("Shrimp", 0.5),
                ("Bell Peppers", 1.0),
                ("Onions", 0.5),
            ],
        ),
        meal(
            "Pot Roast",
            "American",
            &[
                ("Beef Roast", 2.0),
                ("Potatoes", 2.0),
                ("Carrots", 1.0),
                ("Onions", 1.0),
                ("Beef Broth", 1.0),
            ],
        ),
        meal(
            "Shepherd's Pie",
            "American",
            &[
                ("Ground Beef", 1.0),
                ("Potatoes", 2.0),
                ("Carrots", 1.0),
                ("Peas", 0.5),
                ("Onions", 0.5),
                ("Beef Broth", 0.5),
            ],
        ),
        meal(
            "Corn Dogs",
            "American",
            &[
                ("Hot Dogs", 4.0),
                ("Cornmeal", 0.5),
                ("Flour", 0.25),
                ("Eggs", 1.0),
                ("Milk", 0.25),
            ],
        ),
        meal(
            "Biscuits and Gravy",
            "American",
            &[
                ("Biscuits", 4.0),
                ("Sausage", 0.5),
                ("Flour", 0.1),
                ("Milk", 0.5),
                ("Black Pepper", 0.01),
            ],
        ),
        meal(
            "Chicken Pot Pie",
            "American",
            &[
                ("Chicken", 1.0),
                ("Pie Crust", 1.0),
                ("Carrots", 1.0),
                ("Peas", 0.5),
                ("Potatoes", 1.0),
                ("Onions", 0.5),
            ],
        ),
        meal(
            "Tuna Casserole",
            "American",
            &[
                ("Tuna", 1.0),
                ("Pasta", 0.5),
                ("Mushrooms", 0.5),
                ("Peas", 0.5),
                ("Cream of Mushroom Soup", 1.0),
                ("Bread Crumbs", 0.25),
            ],
        ),
        meal(
            "Caesar Salad",
            "American",
            &[
                ("Romaine Lettuce", 1.0),
                ("Caesar Dressing", 0.25),
                ("Parmesan", 0.25),
                ("Croutons", 0.25),
                ("Chicken", 1.0),
            ],
        ),
        meal(
            "Cobb Salad",
            "American",
            &[
                ("Lettuce", 1.0),
                ("Bacon", 0.5),
                ("Eggs", 3.0),
                ("Chicken", 1.0),
                ("Avocado", 1.0),
                ("Blue Cheese", 0.25),
                ("Tomatoes", 2.0),
            ],
        ),
        meal(
            "Lobster Roll",
            "American",
            &[
                ("Lobster", 1.0),
                ("Hot Dog Buns", 2.0),
                ("Mayonnaise", 0.25),
                ("Celery", 0.5),
                ("Lemon", 0.5),
            ],
        ),
        meal(
            "Fish and Chips",
            "American",
            &[
                ("White Fish", 1.5),
                ("Potatoes", 2.0),
                ("Flour", 0.5),
                ("Beer", 0.25),
                ("Tartar Sauce", 0.25),
            ],
        ),
        meal(
            "Corn on the Cob",
            "American",
            &[
                ("Corn", 4.0),
                ("Butter", 0.25),
                ("Salt", 0.01),
            ],
        ),
        meal(
            "Gumbo",
            "American",
            &[
                ("Rice", 2.0),
                ("Chicken", 1.0),
                ("Sausage", 0.5),
                ("Shrimp", 0.5),
                ("Okra", 1.0),
                ("Bell Peppers", 1.0),
                ("Onions", 0.5),
            ],
        ),
        meal(
            "Tater Tots",
            "American",
            &[
                ("Potatoes", 2.0),
                ("Flour", 0.1),
                ("Eggs", 1.0),
                ("Oil", 0.1),
            ],
        ),

        // Seafood
        meal(
            "Grilled Salmon",
            "Seafood",
            &[
                ("Salmon", 1.0),
                ("Lemon", 1.0),
                ("Asparagus", 0.5),
                ("Olive Oil", 0.05),
                ("Salt", 0.01),
                ("Black Pepper", 0.01),
            ],
        ),
        meal(
            "Shrimp Scampi",
            "Seafood",
            &[
                ("Shrimp", 1.0),
                ("Garlic", 0.02),
                ("Butter", 0.25),
                ("Lemon", 1.0),
                ("White Wine", 0.25),
                ("Pasta", 0.5),
            ],
        ),

        // Breakfast
        meal(
            "Pancakes",
            "Breakfast",
            &[
                ("Flour", 0.5),
                ("Eggs", 2.0),
                ("Butter", 0.25),
                ("Maple Syrup", 0.25),
            ],
        ),
        meal(
            "French Toast",
            "Breakfast",
            &[
                ("Bread", 0.5),
                ("Eggs", 3.0),
                ("Milk", 0.25),
                ("Butter", 0.25),
                ("Maple Syrup", 0.25),
            ],
        ),
        meal(
            "Waffles",
            "Breakfast",
            &[
                ("Flour", 0.5),
                ("Eggs", 2.0),
                ("Milk", 0.5),
                ("Butter", 0.25),
                ("Maple Syrup", 0.25),
            ],
        ),
    ]
}
