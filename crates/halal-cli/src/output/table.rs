use halal_core::analysis::{IngredientAnalysis, Verdict};
use halal_core::assistant::RouteResponse;
use halal_core::resolver::TermLookup;
use halal_core::ProductAssessment;

pub fn print_lookups(lookups: &[TermLookup]) {
    for (i, lookup) in lookups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Lookup for {}:", lookup.term);
        println!("  Status: {}", lookup.result.status);
        println!("  Details: {}", lookup.result.detail);
    }
}

pub fn print_analysis(analysis: &IngredientAnalysis) {
    if !analysis.haram.is_empty() {
        println!("Haram Ingredients:");
        for f in &analysis.haram {
            println!("  - {}: {}", f.term, f.detail);
        }
        println!();
    }

    if !analysis.musbooh.is_empty() {
        println!("Doubtful Ingredients:");
        for f in &analysis.musbooh {
            println!("  - {}: {}", f.term, f.detail);
        }
        println!();
    }
}

pub fn print_verdict(verdict: &Verdict) {
    println!("---");
    println!("Status: {}", verdict.status());
    if let Some(reason) = verdict.reason() {
        println!("  {}", reason);
    }
}

pub fn print_assessment(assessment: &ProductAssessment) {
    match assessment {
        ProductAssessment::NotFound { barcode } => {
            println!("Product with barcode {} not found.", barcode);
        }
        ProductAssessment::NoIngredients { barcode, product } => {
            print_product_header(&product.name, &product.brand, barcode.as_str());
            println!("No ingredients information found.");
        }
        ProductAssessment::Assessed {
            barcode,
            product,
            analysis,
            indicators,
            verdict,
        } => {
            print_product_header(&product.name, &product.brand, barcode.as_str());
            if let Some(text) = product.ingredients() {
                println!("Ingredients:");
                println!("  {}\n", text);
            }
            print_analysis(analysis);
            if indicators.has_certification {
                println!("Halal certification label found.");
            }
            if indicators.has_alcohol {
                println!("Alcohol content above threshold.");
            }
            print_verdict(verdict);
        }
    }
}

fn print_product_header(name: &str, brand: &str, barcode: &str) {
    println!("Product: {}", name);
    println!("Brand:   {}", brand);
    println!("Barcode: {}\n", barcode);
}

pub fn print_route(response: &RouteResponse) {
    println!("[{}]", response.tag);
    println!("{}", response.text);
}
