use crate::{RuleSource, normalize_item_name, normalize_verbose_with};
use crate::{Context, Options};

#[test]
fn default_rule_examples() {
    // (expected name, expected category, input)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("Bananas", "Fruits", "ΜΠΑΝΑΝΕΣ"),
        ("Bananas", "Fruits", "μπανάνες"),
        ("Bananas", "Fruits", "Banana"),
        ("Apples", "Fruits", "ΜΗΛΑ ΣΤΑΡΚΙΝ"),
        ("Apples", "Fruits", "μήλα"),
        ("Oranges", "Fruits", "ΠΟΡΤΟΚΑΛΙΑ 2kg"),
        ("Lemons", "Fruits", "λεμόνια"),
        ("Strawberries", "Fruits", "ΦΡΑΟΥΛΕΣ 500g"),
        ("Watermelon", "Fruits", "ΚΑΡΠΟΥΖΙ"),
        ("Grapes", "Fruits", "ΣΤΑΦΥΛΙΑ ΣΟΥΛΤΑΝΙΝΑ"),
        ("Tomatoes", "Vegetables", "ΝΤΟΜΑΤΕΣ"),
        ("Cucumbers", "Vegetables", "αγγούρια"),
        ("Potatoes", "Vegetables", "ΠΑΤΑΤΕΣ ΚΥΠΡΟΥ"),
        ("Onions", "Vegetables", "ΚΡΕΜΜΥΔΙΑ"),
        ("Carrots", "Vegetables", "ΚΑΡΟΤΑ"),
        ("Lettuce", "Vegetables", "ΜΑΡΟΥΛΙ"),
        ("Yogurt", "Dairy", "ΓΙΑΟΥΡΤΙ ΣΤΡΑΓΓΙΣΤΟ 2%"),
        ("Feta Cheese", "Dairy", "ΦΕΤΑ ΠΟΠ 400G"),
        ("Halloumi", "Dairy", "ΧΑΛΛΟΥΜΙ"),
        ("Cheese", "Dairy", "ΤΥΡΙ ΓΚΟΥΝΤΑ"),
        ("Butter", "Dairy", "ΒΟΥΤΥΡΟ"),
        ("Milk 1.5%", "Dairy", "ΓΑΛΑ ΕΛΑΦΡΥ 1.5%"),
        ("Milk 3,5%", "Dairy", "milk 3,5 %"),
        ("Milk", "Dairy", "ΓΑΛΑ ΠΛΗΡΕΣ 1L"),
        ("Eggs", "Dairy", "ΑΥΓΑ 10 τεμ."),
        ("Toast Bread", "Bakery", "ΨΩΜΙ ΤΟΣΤ"),
        ("Bread", "Bakery", "ΨΩΜΙ ΧΩΡΙΑΤΙΚΟ"),
        ("Minced Meat", "Meat", "ΚΙΜΑΣ"),
        ("Chicken", "Meat", "ΚΟΤΟΠΟΥΛΟ ΦΙΛΕΤΟ"),
        ("Pork", "Meat", "ΧΟΙΡΙΝΟ ΜΠΡΙΖΟΛΑ"),
        ("Beef", "Meat", "ΜΟΣΧΑΡΙ"),
        ("Salmon", "Fish", "ΣΟΛΟΜΟΣ ΦΙΛΕΤΟ"),
        ("Olive Oil", "Pantry", "extra virgin olive oil 1L"),
        ("Olive Oil", "Pantry", "ΕΛΑΙΟΛΑΔΟ"),
        ("Pasta", "Pantry", "ΜΑΚΑΡΟΝΙΑ Νο 10"),
        ("Rice", "Pantry", "ΡΥΖΙ ΚΑΡΟΛΙΝΑ"),
        ("Flour", "Pantry", "ΑΛΕΥΡΙ"),
        ("Sugar", "Pantry", "ΖΑΧΑΡΗ"),
        ("Honey", "Pantry", "ΜΕΛΙ ΘΥΜΑΡΙΣΙΟ"),
        ("Juice", "Beverages", "ΧΥΜΟΣ ΠΟΡΤΟΚΑΛΙ"),
        ("Coffee", "Beverages", "ΚΑΦΕΣ ΕΛΛΗΝΙΚΟΣ"),
        ("Water", "Beverages", "ΝΕΡΟ 6 pcs"),
        ("Beer", "Beverages", "ΜΠΥΡΑ"),
        ("Chips", "Snacks", "ΠΑΤΑΤΑΚΙΑ"),
        ("Chocolate", "Snacks", "ΣΟΚΟΛΑΤΑ ΓΑΛΑΚΤΟΣ"),
    ];

    for (name, category, input) in cases {
        let res = normalize_item_name(input, None);
        assert_eq!(res.normalized_name, name, "input {input:?}");
        assert_eq!(res.category.as_deref(), Some(category), "input {input:?}");
    }
}

#[test]
fn store_rule_examples() {
    // (store, expected name, expected category, input)
    let cases: Vec<(&str, &str, &str, &str)> = vec![
        ("ALPHAMEGA", "Bananas", "Fruits", "ΜΠΑΝΑΝΕΣ"),
        ("ALPHAMEGA", "Fresh Bread", "Bakery", "ΦΡΕΣΚΟ ΨΩΜΙ"),
        ("ALPHAMEGA", "Fresh Milk 3%", "Dairy", "ΓΑΛΑ ΦΡΕΣΚΟ 3%"),
        ("ALPHAMEGA", "Fresh Milk", "Dairy", "ΦΡ. ΓΑΛΑ"),
        ("ALPHAMEGA", "Cyprus Halloumi", "Dairy", "ΧΑΛΛΟΥΜΙ ΚΥΠΡΟΥ"),
        ("LIDL", "Yogurt", "Dairy", "MILBONA YOGHURT 10%"),
        ("LIDL", "Feta Cheese", "Dairy", "PILOS FETA 200G"),
        ("LIDL", "Long Life Milk 1.5%", "Dairy", "H-MILCH 1.5%"),
        ("LIDL", "Bananas", "Fruits", "BANANEN 1.29 €"),
        ("LIDL", "Juice", "Beverages", "SOLEVITA ORANGE"),
        ("SKLAVENITIS", "Toast Bread", "Bakery", "ΨΩΜΙ ΤΟΣΤ"),
        ("SKLAVENITIS", "Minced Beef", "Meat", "ΚΙΜΑΣ ΜΟΣΧΑΡΙΣΙΟΣ"),
        ("AB", "Olive Oil", "Pantry", "ΑΒ ΕΛΑΙΟΛΑΔΟ 1L"),
        ("AB", "Milk", "Dairy", "AB ΓΑΛΑ"),
    ];

    for (store, name, category, input) in cases {
        let res = normalize_verbose_with(input, &Context::for_store(store), &Options::default());
        assert_eq!(res.result.normalized_name, name, "input {input:?} @ {store}");
        assert_eq!(res.result.category.as_deref(), Some(category), "input {input:?} @ {store}");
        assert_eq!(res.details.source, RuleSource::Store(store.to_string()), "input {input:?} @ {store}");
    }
}

#[test]
fn store_without_matching_rule_falls_back_to_defaults() {
    let res = normalize_verbose_with("ΝΤΟΜΑΤΕΣ", &Context::for_store("LIDL"), &Options::default());
    assert_eq!(res.result.normalized_name, "Tomatoes");
    assert_eq!(res.details.source, RuleSource::Default);
}

#[test]
fn unmatched_examples_pass_through() {
    let cases: Vec<(&str, &str)> = vec![
        ("PAPER TOWELS", "PAPER TOWELS"),
        ("ΧΑΡΤΙ ΚΟΥΖΙΝΑΣ", "CHARTI KOYZINAS"),
        ("ΑΠΟΡΡΥΠΑΝΤΙΚΟ 3 x 1 pcs", "APORRYPANTIKO"),
    ];

    for (input, name) in cases {
        let res = normalize_item_name(input, None);
        assert_eq!(res.normalized_name, name, "input {input:?}");
        assert_eq!(res.category, None, "input {input:?}");
        assert!(res.confidence < 0.8, "input {input:?}");
    }
}
