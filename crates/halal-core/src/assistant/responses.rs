//! Fixed response texts for the assistant.

pub const APP_OVERVIEW: &str = "\
This app checks whether food is HALAL, HARAM or MUSBOOH (doubtful) in three ways:
1. E-Code / Ingredient Check: type E-codes or ingredient names and each one is looked up in the local database.
2. Barcode Lookup/Scan: enter or scan an 8, 12 or 13 digit barcode. The product's ingredients are fetched from Open Food Facts and checked one by one, together with its halal labels and alcohol content.
3. Halal Logo Recognition: upload or capture a photo of the packaging to look for a halal certification logo.
Terms that are not in the database are reported as UNKNOWN.";

pub const BARCODE_GUIDANCE: &str = "\
To check a packaged product, use the Barcode Lookup/Scan feature. Enter the 8, 12 or 13 digit barcode, or scan it with the camera or from an uploaded image. The product's ingredient list is analysed and an overall verdict is given.";

pub const LOGO_GUIDANCE: &str = "\
To look for a halal certification logo, use the Halal Logo Recognition feature and upload or capture a photo of the packaging. A detected logo marks the product HALAL; otherwise the result is UNKNOWN.";

pub const INGREDIENT_GUIDANCE: &str = "\
To check E-codes or ingredients, use the E-Code / Ingredient Check feature. Enter one or more E-codes or ingredient names separated by commas, for example: E120, E471, gelatin.";

pub const HARAM_GUIDANCE: &str = "\
HARAM means forbidden. Common haram ingredients include pork and pork derivatives such as lard and gelatin from pig sources, alcohol (ethanol), and insect-derived colours like cochineal/carmine (E120). Enter a specific E-code or ingredient to check it.";

pub const HALAL_GUIDANCE: &str = "\
HALAL means permissible. Plant-based, mineral and synthetic ingredients are generally halal, and a recognised halal certification on the packaging confirms the whole product. Enter a specific E-code or ingredient to check it.";

pub const MUSBOOH_DEFINITION: &str = "\
MUSBOOH means doubtful: the ingredient may be halal or haram depending on its source. Examples are emulsifiers like E471 or glycerol (E422), which can come from plant or animal fats. When in doubt, look for halal certification or ask the manufacturer.";

pub const GREETING: &str = "\
Assalamu alaikum! Ask me about an E-code or ingredient (e.g. \"E471\"), or how to scan a product barcode or recognise a halal logo.";

pub const THANKS: &str = "You're welcome! Let me know if you want to check anything else.";

pub const NO_MATCH: &str = "\
Sorry, I couldn't find that. Try an E-code (e.g. E120) or an ingredient name, or ask how the app works.";
