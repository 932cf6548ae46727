//! Turkish medicine brand dictionary and related tables.
//!
//! Keys are lowercase NFKC brand names as users type them. Values are the
//! canonical generic name, used as the gloss in detection results and as
//! the English replacement before translation.
//!
//! Order matters: fuzzy matching resolves equal-distance candidates to the
//! entry that appears first here.

pub static MEDICINE_DICTIONARY: &[(&str, &str)] = &[
    // ── Paracetamol ─────────────────────────────────────────
    ("parol", "paracetamol"),
    ("tylol", "paracetamol"),
    ("minoset", "paracetamol"),
    ("vermidon", "paracetamol"),
    ("calpol", "paracetamol"),
    ("parasedamol", "paracetamol"),
    ("parasetamol", "paracetamol"),
    ("panadol", "paracetamol"),
    // Paracetamol combinations
    ("aferin", "paracetamol-caffeine"),
    ("aferin forte", "paracetamol-caffeine"),
    ("gripin", "paracetamol-phenylephrine-chlorpheniramine"),
    ("tylol hot", "paracetamol-combination"),
    ("theraflu", "paracetamol-combination"),
    ("fervex", "paracetamol-combination"),
    ("coldrex", "paracetamol-combination"),
    ("deflu", "paracetamol-pseudoephedrine"),
    // ── NSAIDs ──────────────────────────────────────────────
    ("nurofen", "ibuprofen"),
    ("pedifen", "ibuprofen"),
    ("brufen", "ibuprofen"),
    ("dolven", "ibuprofen"),
    ("apranax", "naproxen"),
    ("naprosyn", "naproxen"),
    ("opraks", "naproxen"),
    ("voltaren", "diclofenac"),
    ("dikloron", "diclofenac"),
    ("diclomec", "diclofenac"),
    ("cataflam", "diclofenac"),
    ("majezik", "flurbiprofen"),
    ("arveles", "dexketoprofen"),
    ("dexofen", "dexketoprofen"),
    ("novalgin", "metamizole"),
    // Aspirin
    ("aspirin", "aspirin"),
    ("disprin", "aspirin"),
    ("ecopirin", "aspirin"),
    ("coraspin", "aspirin"),
    ("kardegic", "aspirin"),
    // ── Antibiotics ─────────────────────────────────────────
    ("augmentin", "amoxicillin-clavulanate"),
    ("amoklavin", "amoxicillin-clavulanate"),
    ("klamoks", "amoxicillin-clavulanate"),
    ("amoksisilin", "amoxicillin"),
    ("duocid", "ampicillin-sulbactam"),
    ("cipro", "ciprofloxacin"),
    ("ciproxin", "ciprofloxacin"),
    ("siprofloksasin", "ciprofloxacin"),
    ("klacid", "clarithromycin"),
    ("macrol", "clarithromycin"),
    ("azitromisin", "azithromycin"),
    ("zitromax", "azithromycin"),
    ("azro", "azithromycin"),
    ("iesef", "cefixime"),
    ("cefaks", "cefuroxime"),
    ("cefixime", "cefixime"),
    ("sefuroksim", "cefuroxime"),
    ("suprax", "cefixime"),
    // ── Gastric ─────────────────────────────────────────────
    ("nexium", "esomeprazole"),
    ("lansor", "lansoprazole"),
    ("controloc", "pantoprazole"),
    ("pantpas", "pantoprazole"),
    ("losec", "omeprazole"),
    ("gaviscon", "alginate-antacid"),
    ("rennie", "calcium-carbonate-antacid"),
    ("talcid", "hydrotalcite"),
    ("maalox", "aluminum-magnesium-antacid"),
    ("motilium", "domperidone"),
    ("metpamid", "metoclopramide"),
    // Antispasmodics
    ("buscopan", "hyoscine"),
    ("spazmol", "hyoscine"),
    ("duspatalin", "mebeverine"),
    ("meteospasmyl", "alverine-simethicone"),
    // ── Antihistamines ──────────────────────────────────────
    ("zyrtec", "cetirizine"),
    ("cetrin", "cetirizine"),
    ("allerset", "cetirizine"),
    ("setrizin", "cetirizine"),
    ("histazin", "cetirizine"),
    ("aerius", "desloratadine"),
    ("desloratadin", "desloratadine"),
    ("xyzal", "levocetirizine"),
    ("loratadin", "loratadine"),
    ("telfast", "fexofenadine"),
    ("avil", "pheniramine"),
    // ── Nasal and cough ─────────────────────────────────────
    ("otrivin", "xylometazoline"),
    ("iliadin", "oxymetazoline"),
    ("prospan", "ivy-leaf-extract"),
    ("mucosolvan", "ambroxol"),
    ("bromeks", "bromhexine"),
    ("tusso", "dextromethorphan"),
    ("sudafed", "pseudoephedrine"),
    ("sinecod", "butamirate"),
    // ── Muscle relaxants ────────────────────────────────────
    ("muscoril", "thiocolchicoside"),
    ("myoril", "thiocolchicoside"),
    ("sirdalud", "tizanidine"),
    ("tizanidin", "tizanidine"),
    // ── Thyroid ─────────────────────────────────────────────
    ("euthyrox", "levothyroxine"),
    ("levotiron", "levothyroxine"),
    ("tefor", "levothyroxine"),
    // ── Asthma / COPD ───────────────────────────────────────
    ("ventolin", "salbutamol"),
    ("seretide", "fluticasone-salmeterol"),
    ("symbicort", "budesonide-formoterol"),
    ("singulair", "montelukast"),
    ("flixotide", "fluticasone"),
    ("pulmicort", "budesonide"),
    // ── Blood pressure ──────────────────────────────────────
    ("beloc", "metoprolol"),
    ("concor", "bisoprolol"),
    ("norvasc", "amlodipine"),
    ("amlodipin", "amlodipine"),
    // ── Cholesterol ─────────────────────────────────────────
    ("lipitor", "atorvastatin"),
    ("crestor", "rosuvastatin"),
    ("atorvastatin", "atorvastatin"),
    // ── Diabetes ────────────────────────────────────────────
    ("metformin", "metformin"),
    ("glucophage", "metformin"),
    ("diamicron", "gliclazide"),
    ("ozempic", "semaglutide"),
    ("wegovy", "semaglutide"),
    ("jardiance", "empagliflozin"),
    ("forxiga", "dapagliflozin"),
    ("januvia", "sitagliptin"),
    ("lantus", "insulin-glargine"),
    // ── Anticoagulants ──────────────────────────────────────
    ("coumadin", "warfarin"),
    ("plavix", "clopidogrel"),
    ("eliquis", "apixaban"),
    ("xarelto", "rivaroxaban"),
    ("pradaxa", "dabigatran"),
    // ── Psychiatric ─────────────────────────────────────────
    ("lexapro", "escitalopram"),
    ("cipralex", "escitalopram"),
    ("prozac", "fluoxetine"),
    ("lustral", "sertraline"),
    ("xanax", "alprazolam"),
    // ── Topicals ────────────────────────────────────────────
    ("fucidin", "fusidic-acid"),
    ("bactroban", "mupirocin"),
    ("triderm", "betamethasone-clotrimazole"),
    ("advantan", "methylprednisolone"),
    ("bepanthen", "dexpanthenol"),
    // ── Vitamins ────────────────────────────────────────────
    ("supradyn", "multivitamin"),
    ("centrum", "multivitamin"),
    ("pharmaton", "multivitamin-ginseng"),
    ("berocca", "b-vitamins"),
    ("elevit", "prenatal-vitamins"),
    ("bemiks", "b-complex"),
    ("benexol", "b-vitamins"),
];

/// Common misspellings. Every target must be a dictionary key.
pub static MEDICINE_TYPOS: &[(&str, &str)] = &[
    ("paroll", "parol"),
    ("parool", "parol"),
    ("paral", "parol"),
    ("parole", "parol"),
    ("porol", "parol"),
    ("prol", "parol"),
    ("afeirin", "aferin"),
    ("afferin", "aferin"),
    ("afren", "aferin"),
    ("afirin", "aferin"),
    ("eferin", "aferin"),
    ("aferrin", "aferin"),
    ("tilol", "tylol"),
    ("tyloll", "tylol"),
    ("taylol", "tylol"),
    ("tiloll", "tylol"),
    ("apranaks", "apranax"),
    ("apranaksi", "apranax"),
    ("apranx", "apranax"),
    ("apranak", "apranax"),
    ("aprenax", "apranax"),
    ("apranex", "apranax"),
    ("norofen", "nurofen"),
    ("nurafen", "nurofen"),
    ("nuroffen", "nurofen"),
    ("neurofen", "nurofen"),
    ("macezik", "majezik"),
    ("majezic", "majezik"),
    ("mecezik", "majezik"),
    ("ogmentin", "augmentin"),
    ("agmentin", "augmentin"),
    ("augmantin", "augmentin"),
    ("augmanten", "augmentin"),
    ("ogmanten", "augmentin"),
    ("giripin", "gripin"),
    ("gribin", "gripin"),
    ("arvales", "arveles"),
    ("arvelez", "arveles"),
    ("arweles", "arveles"),
    ("woltaren", "voltaren"),
    ("voltaran", "voltaren"),
    ("valtaren", "voltaren"),
    ("asprin", "aspirin"),
    ("novaljin", "novalgin"),
    ("novalcin", "novalgin"),
    ("euthrox", "euthyrox"),
    ("euthirox", "euthyrox"),
    ("eutirox", "euthyrox"),
    ("ozempik", "ozempic"),
    ("ksarelto", "xarelto"),
    ("zarelto", "xarelto"),
];

/// Controlled or abuse-prone generics. Mentions call for a referral
/// rather than dosing guidance.
pub static HIGH_RISK_GENERICS: &[&str] = &[
    // Benzodiazepines
    "alprazolam", "diazepam", "lorazepam", "clonazepam",
    // Opioids
    "tramadol", "codeine", "morphine", "fentanyl", "oxycodone",
    // Z-drugs
    "zolpidem", "zopiclone",
    "methylphenidate", "pregabalin", "gabapentin",
];

/// High-risk brands, including ones absent from the main dictionary.
pub static HIGH_RISK_BRANDS: &[&str] = &[
    "xanax", "rivotril", "diazem", "ativan",
    "tramal", "contramal", "tramadol",
    "ritalin", "concerta",
    "lyrica", "pregabalin",
    "imovane", "stilnox",
];

/// English generic names an LLM reply may contain, with the Turkish
/// generic name shown to the user. Controlled substances are left out.
pub static ENGLISH_TO_TURKISH_GENERICS: &[(&str, &str)] = &[
    ("paracetamol", "Parasetamol"),
    ("acetaminophen", "Parasetamol"),
    ("ibuprofen", "İbuprofen"),
    ("naproxen", "Naproksen"),
    ("aspirin", "Aspirin"),
    ("diclofenac", "Diklofenak"),
    ("amoxicillin", "Amoksisilin"),
    ("azithromycin", "Azitromisin"),
    ("ciprofloxacin", "Siprofloksasin"),
    ("metronidazole", "Metronidazol"),
    ("penicillin", "Penisilin"),
    ("doxycycline", "Doksisiklin"),
    ("omeprazole", "Omeprazol"),
    ("pantoprazole", "Pantoprazol"),
    ("ranitidine", "Ranitidin"),
    ("metoclopramide", "Metoklopramid"),
    ("cetirizine", "Setirizin"),
    ("loratadine", "Loratadin"),
    ("desloratadine", "Desloratadin"),
    ("fexofenadine", "Feksofenadin"),
    ("diphenhydramine", "Difenhidramin"),
    ("pseudoephedrine", "Psödoefedrin"),
    ("dextromethorphan", "Dekstrometorfan"),
    ("guaifenesin", "Guaifenesin"),
    ("metformin", "Metformin"),
    ("insulin", "İnsülin"),
    ("atorvastatin", "Atorvastatin"),
    ("lisinopril", "Lisinopril"),
    ("amlodipine", "Amlodipin"),
    ("losartan", "Losartan"),
    ("vitamin d", "D Vitamini"),
    ("vitamin c", "C Vitamini"),
    ("vitamin b12", "B12 Vitamini"),
    ("folic acid", "Folik Asit"),
    ("iron", "Demir"),
    ("calcium", "Kalsiyum"),
    ("magnesium", "Magnezyum"),
];

/// Turkish case, possessive and plural endings, longest first. Bare `a`
/// and `e` are absent so "parola" does not reduce to "parol".
pub static TURKISH_SUFFIXES: &[&str] = &[
    "lerden", "lardan",
    "lerde", "larda", "lerin", "ların", "lerle", "larla",
    "ından", "inden", "undan", "ünden",
    "lere", "lara", "leri", "ları",
    "ında", "inde", "unda", "ünde", "ının", "inin", "unun", "ünün",
    "ıyla", "iyle", "uyla", "üyle",
    "ler", "lar",
    "ına", "ine", "una", "üne", "ını", "ini", "unu", "ünü",
    "dan", "den", "tan", "ten",
    "da", "de", "ta", "te", "ya", "ye",
    "ım", "im", "um", "üm", "ın", "in", "un", "ün",
    "sı", "si", "su", "sü", "mı", "mi", "mu", "mü",
    "ı", "i", "u", "ü",
];

/// Dictionary entry `(brand, gloss)` for a canonical brand key.
///
/// Brand and typo keys are stored fully folded (no `ı`), so they compare
/// directly against [`normalize_text`](super::normalize_text) output.
pub fn entry(brand: &str) -> Option<(&'static str, &'static str)> {
    MEDICINE_DICTIONARY.iter().find(|(key, _)| *key == brand).copied()
}

/// Gloss for a canonical brand key.
pub fn lookup(brand: &str) -> Option<&'static str> {
    entry(brand).map(|(_, gloss)| gloss)
}

/// Canonical brand key for a known misspelling.
pub fn correct_typo(word: &str) -> Option<&'static str> {
    MEDICINE_TYPOS
        .iter()
        .find(|(typo, _)| *typo == word)
        .map(|&(_, target)| target)
}
