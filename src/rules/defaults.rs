//! Default, store-independent rules.
//!
//! Every pattern consumes the whole name so the replacement *is* the canonical
//! name. Within a category block, compound products come before their
//! ingredients ("orange juice" must hit the juice rule, not oranges) and
//! specific variants before the general form (feta before cheese, milk with a
//! fat percentage before plain milk).

use crate::NormalizationRule;

const FRUITS: &str = "Fruits";
const VEGETABLES: &str = "Vegetables";
const DAIRY: &str = "Dairy";
const BAKERY: &str = "Bakery";
const MEAT: &str = "Meat";
const FISH: &str = "Fish";
const PANTRY: &str = "Pantry";
const BEVERAGES: &str = "Beverages";
const SNACKS: &str = "Snacks";

pub(crate) fn get() -> Vec<NormalizationRule> {
    let mut rules = Vec::new();
    rules.extend(snacks());
    rules.extend(beverages());
    rules.extend(dairy());
    rules.extend(bakery());
    rules.extend(meat_and_fish());
    rules.extend(fruits());
    rules.extend(vegetables());
    rules.extend(pantry());
    rules
}

fn snacks() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\b(?:chips|crisps|πατατ[αά]κια)\b.*$" => "Chips", SNACKS),
        rule!(re: r"(?i)^.*\b(?:chocolate|σοκολ[αά]τ[αε][σς]?)\b.*$" => "Chocolate", SNACKS),
        rule!(re: r"(?i)^.*\b(?:biscuits?|cookies?|μπισκ[οό]τα)\b.*$" => "Biscuits", SNACKS),
    ]
}

fn beverages() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\b(?:juice|χυμ[οό][σς]?)\b.*$" => "Juice", BEVERAGES),
        rule!(re: r"(?i)^.*\b(?:coffee|καφ[εέ][σς]?)\b.*$" => "Coffee", BEVERAGES),
        rule!(re: r"(?i)^.*\b(?:tea|τσ[αά]ι)\b.*$" => "Tea", BEVERAGES),
        rule!(re: r"(?i)^.*\b(?:beer|μπ[υύ]ρα)\b.*$" => "Beer", BEVERAGES),
        rule!(re: r"(?i)^.*\b(?:wine|κρασ[ιί])\b.*$" => "Wine", BEVERAGES),
        rule!(re: r"(?i)^.*\b(?:water|νερ[οό])\b.*$" => "Water", BEVERAGES),
    ]
}

fn dairy() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\b(?:yog(?:h)?urt|γιαο[υύ]ρτι(?:α)?)\b.*$" => "Yogurt", DAIRY),
        rule!(re: r"(?i)^.*\b(?:feta|φ[εέ]τα)\b.*$" => "Feta Cheese", DAIRY),
        rule!(re: r"(?i)^.*\b(?:halloumi|χαλλο[υύ]μι)\b.*$" => "Halloumi", DAIRY),
        rule!(re: r"(?i)^.*\b(?:cheese|τυρ[ιί](?:α)?)\b.*$" => "Cheese", DAIRY),
        rule!(re: r"(?i)^.*\b(?:butter|βο[υύ]τυρο)\b.*$" => "Butter", DAIRY),
        rule!(re: r"(?i)^.*\b(?:milk|γ[αά]λα)\b.*?(\d+(?:[.,]\d+)?)\s*%.*$" => "Milk $1%", DAIRY),
        rule!(re: r"(?i)^.*\b(?:milk|γ[αά]λα)\b.*$" => "Milk", DAIRY),
        rule!(re: r"(?i)^.*\b(?:eggs?|αυγ[αά]|αβγ[αά])\b.*$" => "Eggs", DAIRY),
    ]
}

fn bakery() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\b(?:toast\s+bread|ψωμ[ιί]\s+τοστ)\b.*$" => "Toast Bread", BAKERY),
        rule!(re: r"(?i)^.*\b(?:bread|ψωμ[ιί])\b.*$" => "Bread", BAKERY),
    ]
}

fn meat_and_fish() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\b(?:minced\s+meat|κιμ[αά][σς])\b.*$" => "Minced Meat", MEAT),
        rule!(re: r"(?i)^.*\b(?:chicken|κοτ[οό]πουλο)\b.*$" => "Chicken", MEAT),
        rule!(re: r"(?i)^.*\b(?:pork|χοιριν[οό])\b.*$" => "Pork", MEAT),
        rule!(re: r"(?i)^.*\b(?:beef|μοσχ[αά]ρι)\b.*$" => "Beef", MEAT),
        rule!(re: r"(?i)^.*\b(?:salmon|σολομ[οό][σς])\b.*$" => "Salmon", FISH),
    ]
}

fn fruits() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\b(?:bananas?|μπαν[αά]ν[αε][σς]?)\b.*$" => "Bananas", FRUITS),
        rule!(re: r"(?i)^.*\b(?:apples?|μ[ηή]λ[αοά])\b.*$" => "Apples", FRUITS),
        rule!(re: r"(?i)^.*\b(?:oranges?|πορτοκ[αά]λι(?:α)?)\b.*$" => "Oranges", FRUITS),
        rule!(re: r"(?i)^.*\b(?:lemons?|λεμ[οό]νι(?:α)?)\b.*$" => "Lemons", FRUITS),
        rule!(re: r"(?i)^.*\b(?:strawberry|strawberries|φρ[αά]ουλ[αε][σς]?)\b.*$" => "Strawberries", FRUITS),
        rule!(re: r"(?i)^.*\b(?:watermelons?|καρπο[υύ]ζι(?:α)?)\b.*$" => "Watermelon", FRUITS),
        rule!(re: r"(?i)^.*\b(?:grapes?|σταφ[υύ]λι(?:α)?)\b.*$" => "Grapes", FRUITS),
    ]
}

fn vegetables() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\b(?:tomato(?:es)?|ντομ[αά]τ[αε][σς]?)\b.*$" => "Tomatoes", VEGETABLES),
        rule!(re: r"(?i)^.*\b(?:cucumbers?|αγγο[υύ]ρι(?:α)?)\b.*$" => "Cucumbers", VEGETABLES),
        rule!(re: r"(?i)^.*\b(?:potato(?:es)?|πατ[αά]τ[αε][σς]?)\b.*$" => "Potatoes", VEGETABLES),
        rule!(re: r"(?i)^.*\b(?:onions?|κρεμμ[υύ]δι(?:α)?)\b.*$" => "Onions", VEGETABLES),
        rule!(re: r"(?i)^.*\b(?:carrots?|καρ[οό]τ[οα])\b.*$" => "Carrots", VEGETABLES),
        rule!(re: r"(?i)^.*\b(?:lettuce|μαρο[υύ]λι(?:α)?)\b.*$" => "Lettuce", VEGETABLES),
    ]
}

fn pantry() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\b(?:olive\s+oil|ελαι[οό]λαδο)\b.*$" => "Olive Oil", PANTRY),
        rule!(re: r"(?i)^.*\b(?:pasta|spaghetti|μακαρ[οό]νια|σπαγγ[εέ]τι)\b.*$" => "Pasta", PANTRY),
        rule!(re: r"(?i)^.*\b(?:rice|ρ[υύ]ζι)\b.*$" => "Rice", PANTRY),
        rule!(re: r"(?i)^.*\b(?:flour|αλε[υύ]ρι)\b.*$" => "Flour", PANTRY),
        rule!(re: r"(?i)^.*\b(?:sugar|ζ[αά]χαρη)\b.*$" => "Sugar", PANTRY),
        rule!(re: r"(?i)^.*\b(?:honey|μ[εέ]λι)\b.*$" => "Honey", PANTRY),
    ]
}
