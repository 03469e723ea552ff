//! Fixed vocabulary for translating asset filenames from English to French.
//!
//! Replacement strings use the `regex` crate's `${n}` group syntax.

/// Whole filenames that translate to a fixed name.
pub(crate) const DIRECT_TRANSLATIONS: &[(&str, &str)] = &[
    ("Cat.png", "chat.png"),
    ("Chicken.png", "poulet.png"),
    ("Horseshoe.png", "fer-cheval.png"),
    ("Yoke.png", "joug.png"),
    ("Bucket.png", "seau.png"),
    ("Bathtub.png", "baignoire.png"),
    ("Crib.png", "berceau.png"),
    ("Gong.png", "gong.png"),
    ("Pitcher.png", "pichet.png"),
    ("Scroll.png", "parchemin.png"),
    ("Lantern.png", "lanterne.png"),
    ("Piano.png", "piano.png"),
    ("Stove.png", "poele.png"),
    ("Well.png", "puits.png"),
    ("Cabinet.png", "armoire.png"),
];

/// Ordered `(pattern, replacement)` pairs. More specific patterns must come first.
pub(crate) const PATTERN_RULES: &[(&str, &str)] = &[
    // Camp
    (r"^Banner (\d+)([ab]?)\.png$", "banniere-${1}${2}.png"),
    (r"^Bomb (\d+)\.png$", "bombe-${1}.png"),
    (r"^Cage (\d+)\.png$", "cage-${1}.png"),
    (r"^Ladder (\d+)\.png$", "echelle-${1}.png"),
    (r"^Sack Barricade[_ ](\d+)\.png$", "barricade-sacs-${1}.png"),
    (r"^Sack Barricade[_ ]seamless\.png$", "barricade-sacs-seamless.png"),
    (
        r"^Sack Barricade[_ ]seamless[_ ](cap|start)\.png$",
        "barricade-sacs-seamless-${1}.png",
    ),
    (r"^Spiked Barricade[_ ](\d+)\.png$", "barricade-pieux-${1}.png"),
    (r"^Spiked Barricade[_ ]seamless\.png$", "barricade-pieux-seamless.png"),
    (
        r"^Spiked Barricade[_ ]seamless[_ ](cap|start)\.png$",
        "barricade-pieux-seamless-${1}.png",
    ),
    (r"^Staked Head (\d+)\.png$", "tete-empalee-${1}.png"),
    (r"^Training Target (\d+)\.png$", "cible-entrainement-${1}.png"),
    (r"^Wooden Gatehouse (\d+)\.png$", "porte-bois-${1}.png"),
    (r"^Wooden Wall Piece[_ ]destroyed\.png$", "mur-bois-detruit.png"),
    // Farm
    (r"^Basin (\d+)\.png$", "bassin-${1}.png"),
    (r"^Farm Tool (\d+)\.png$", "outil-ferme-${1}.png"),
    (r"^Fence (\d+)\.png$", "cloture-${1}.png"),
    (r"^Fence Part (\d+)\.png$", "cloture-partie-${1}.png"),
    (r"^Fence[_ ]corner\.png$", "cloture-coin.png"),
    (r"^Fieldstone Wall (\d+)\.png$", "mur-pierre-${1}.png"),
    (r"^Fieldstone[_ ](T|X|corner)\.png$", "mur-pierre-${1}.png"),
    (r"^Horse (\d+)([ab]?)\.png$", "cheval-${1}${2}.png"),
    (r"^Logs (\d+)\.png$", "rondins-${1}.png"),
    (r"^Plot (\d+)\.png$", "parcelle-${1}.png"),
    (r"^Plot[_ ]filled (\d+)\.png$", "parcelle-cultivee-${1}.png"),
    (r"^Plow (\d+)\.png$", "charrue-${1}.png"),
    (r"^Sack (\d+)\.png$", "sac-${1}.png"),
    (r"^Scarecrow (\d+)\.png$", "epouvantail-${1}.png"),
    (r"^Straw Pile\.png$", "tas-paille.png"),
    (r"^Tall Grass (\d+)\.png$", "herbe-haute-${1}.png"),
    (r"^Tree Stump (\d+)\.png$", "souche-arbre-${1}.png"),
    (r"^Wagon (\d+)\.png$", "chariot-${1}.png"),
    (r"^Wagon Wheel (\d+)\.png$", "roue-chariot-${1}.png"),
    (r"^Well (\d+)\.png$", "puits-${1}.png"),
    // Furniture
    (r"^Animal Pelt (\d+)([ab]?)\.png$", "peau-animal-${1}${2}.png"),
    (r"^Armchair (\d+)([ab]?)\.png$", "fauteuil-${1}${2}.png"),
    (r"^Bar (\d+)\.png$", "bar-${1}.png"),
    (r"^Barrel (\d+)\.png$", "tonneau-${1}.png"),
    (r"^Barrel Cask\.png$", "tonneau-fut.png"),
    (r"^Barrel[_ ](empty|full|side)\.png$", "tonneau-${1}.png"),
    (r"^Basket (\d+)\.png$", "panier-${1}.png"),
    (r"^Bed (\d+)([abc]?)\.png$", "lit-${1}${2}.png"),
    (r"^Bench (\d+)\.png$", "banc-${1}.png"),
    (r"^Booth (\d+)([ab]?)\.png$", "box-${1}${2}.png"),
    (r"^Cabinet (\d+)\.png$", "armoire-${1}.png"),
    (r"^Carpet (\d+)([ab]?)\.png$", "tapis-${1}${2}.png"),
    (r"^Cauldron (\d+)([abc]?)\.png$", "chaudron-${1}${2}.png"),
    (r"^Cellar Door\.png$", "porte-cave.png"),
    (r"^Chair (\d+)([ab]?)\.png$", "chaise-${1}${2}.png"),
    (r"^Chair (\d+) \(D\)\.png$", "chaise-${1}-cassee.png"),
    (r"^Chest (\d+)([ab]?)\.png$", "coffre-${1}${2}.png"),
    (r"^Church Pew\.png$", "banc-eglise.png"),
    (r"^Couch (\d+)([ab]?)\.png$", "canape-${1}${2}.png"),
    (r"^Crate (\d+)\.png$", "caisse-${1}.png"),
    (r"^Cupboard (\d+)\.png$", "placard-${1}.png"),
    (r"^Cupboard (\d+) \(D\)\.png$", "placard-${1}-detruit.png"),
    (r"^Curtain (\d+)\.png$", "rideau-${1}.png"),
    (r"^Cutlery (\d+)\.png$", "couverts-${1}.png"),
    (r"^Door (\d+)\.png$", "porte-${1}.png"),
    (r"^Drink Cart\.png$", "chariot-boissons.png"),
    (r"^Furnished Table (\d+)\.png$", "table-garnie-${1}.png"),
    (r"^Hand Bellow\.png$", "soufflet-main.png"),
    (r"^Hearth\.png$", "foyer.png"),
    (r"^Hearth \(lit\)\.png$", "foyer-allume.png"),
    (r"^Kindling\.png$", "petit-bois.png"),
    (r"^Kitchen Knife\.png$", "couteau-cuisine.png"),
    (r"^Lantern (\d+)\.png$", "lanterne-${1}.png"),
    (r"^Lounge Table (\d+)\.png$", "table-basse-${1}.png"),
    (r"^Lounge Table (\d+) \(D\)\.png$", "table-basse-${1}-detruite.png"),
    (r"^Mirror ([ab])\.png$", "miroir-${1}.png"),
    (r"^Piano Bench\.png$", "banc-piano.png"),
    (r"^Pillow (\d+)([abc])\.png$", "oreiller-${1}${2}.png"),
    (r"^Plant (\d+)\.png$", "plante-${1}.png"),
    (r"^Pot (\d+)\.png$", "pot-${1}.png"),
    (r"^Shelf (\d+)\.png$", "etagere-${1}.png"),
    (r"^Shelf (\d+) \(D\)\.png$", "etagere-${1}-detruit.png"),
    (r"^Shelf (\d+)\([AB]\)\.png$", "etagere-${1}${1}.png"),
    (r"^Side Table (\d+)\.png$", "table-appoint-${1}.png"),
    (r"^Side Table (\d+) \(D\)\.png$", "table-appoint-${1}-detruite.png"),
    (r"^Spoon (\d+)\.png$", "cuillere-${1}.png"),
    (r"^Staircase (\d+)\.png$", "escalier-${1}.png"),
    (r"^Stool (\d+)\.png$", "tabouret-${1}.png"),
    (r"^Stool (\d+) \(D\)\.png$", "tabouret-${1}-detruit.png"),
    (r"^Swinging Door\.png$", "porte-battante.png"),
    (r"^Table (\d+)\.png$", "table-${1}.png"),
    (r"^Table (\d+) \(D\)\.png$", "table-${1}-detruite.png"),
    (r"^Trophy (\d+)\.png$", "trophee-${1}.png"),
    (r"^Wall Hook (\d+)\.png$", "crochet-mural-${1}.png"),
    (r"^Wood Pile\.png$", "tas-bois.png"),
    (r"^Wooden Seat (\d+)\.png$", "siege-bois-${1}.png"),
    (r"^Wooden Seat (\d+) \(D\)\.png$", "siege-bois-${1}-detruit.png"),
    // Candles
    (r"^Candle (\d+)\.png$", "bougie-${1}.png"),
    (r"^Candle (\d+) \(lit\)\.png$", "bougie-${1}-allumee.png"),
    (r"^Candelabra (\d+)\.png$", "candelabre-${1}.png"),
    (r"^Candelabra (\d+) \(lit\)\.png$", "candelabre-${1}-allume.png"),
    // Market
    (r"^Stall[_ ]food (\d+)\.png$", "etalage-nourriture-${1}.png"),
    (r"^Stall (\d+)\.png$", "etalage-${1}.png"),
    (r"^Jewelery (\d+)\.png$", "bijouterie-${1}.png"),
    (r"^Equipment (\d+)\.png$", "equipement-${1}.png"),
    (r"^Tent (\d+)\.png$", "tente-${1}.png"),
    (r"^Pottery (\d+)\.png$", "poterie-${1}.png"),
    (r"^Fabric (\d+)\.png$", "tissu-${1}.png"),
    (r"^Wagon (\d+) \(filled\)\.png$", "chariot-${1}-rempli.png"),
];

/// Composite base names (extension stripped) with no numeric suffix.
pub(crate) const BASE_NAME_TRANSLATIONS: &[(&str, &str)] = &[
    ("Gate Open", "porte-ouverte"),
    ("Gate Closed", "porte-fermee"),
    ("Barrel empty", "tonneau-vide"),
    ("Barrel full", "tonneau-plein"),
    ("Barrel side", "tonneau-cote"),
];

pub(crate) const CROPS: &[(&str, &str)] = &[
    ("Beans", "haricots"),
    ("Berries", "baies"),
    ("Peas", "pois"),
    ("Wheat", "ble"),
];

pub(crate) const ANIMALS: &[(&str, &str)] = &[
    ("Cow", "vache"),
    ("Goat", "chevre"),
    ("Pig", "cochon"),
    ("Sheep", "mouton"),
];

/// Keys are lowercase; food names are looked up case-insensitively.
pub(crate) const FOODS: &[(&str, &str)] = &[
    ("potatoes", "pommes-terre"),
    ("apples", "pommes"),
    ("lettuce", "laitue"),
    ("cabbage", "chou"),
];

pub(crate) const SIEGE_WEAPONS: &[(&str, &str)] = &[
    ("Ballista 1", "baliste-1"),
    ("Ballista 2", "baliste-2"),
    ("Battering Ram 1", "belier-1"),
    ("Cannon 1", "canon-1"),
    ("Cannon 2", "canon-2"),
    ("Mangonel 1", "mangonneau-1"),
    ("Mangonel 2", "mangonneau-2"),
    ("Rocketeer 1", "roquette-1"),
    ("Sling", "fronde"),
    ("Trebuchet", "trebuchet"),
    ("War Wagon", "chariot-guerre"),
    ("War Wagon_cannons", "chariot-guerre-canons"),
    ("War Wagon_ram", "chariot-guerre-belier"),
    ("War Wagon_ram2", "chariot-guerre-belier2"),
];
