//! Keyword sets for domain scoring and greeting detection.
//!
//! Entries are matched by substring containment against normalized text, so
//! overlapping entries ("ağrı", "baş ağrısı") both count. That is how the
//! scoring thresholds were tuned; do not deduplicate across entries.

/// Health signals: symptoms, diseases, medical terms, body parts, and
/// typical health-question phrasings.
pub static HEALTH_KEYWORDS: &[&str] = &[
    // Symptoms
    "ağrı", "ağrısı", "acı", "sızı", "sancı", "yanma", "batma",
    "baş ağrısı", "karın ağrısı", "göğüs ağrısı", "bel ağrısı", "sırt ağrısı",
    "ateş", "yüksek ateş", "titreme", "üşüme",
    "öksürük", "öksürme", "hapşırma", "burun akıntısı", "burun tıkanıklığı",
    "bulantı", "kusma", "mide bulantısı", "ishal", "kabızlık",
    "baş dönmesi", "sersemlik", "bayılma", "halsizlik", "yorgunluk",
    "kaşıntı", "döküntü", "kızarıklık", "şişlik", "morarma",
    "nefes darlığı", "nefes almak", "soluk", "ödem",
    "çarpıntı", "kalp çarpıntısı", "tansiyon",
    "uyku problemi", "uykusuzluk", "uyku bozukluğu",
    "kilo", "zayıflama", "kilo kaybı", "iştahsızlık",
    "kanama", "kan", "yara",
    // Diseases
    "hastalık", "rahatsızlık", "şikayet", "belirti", "semptom",
    "grip", "nezle", "soğuk algınlığı", "enfeksiyon", "virüs", "bakteri",
    "diyabet", "şeker hastalığı", "hipertansiyon",
    "astım", "bronşit", "zatürre", "pnömoni",
    "kalp", "kalp hastalığı", "damar", "kolesterol",
    "kanser", "tümör",
    "alerji", "alerjik", "egzama", "sedef",
    "depresyon", "anksiyete", "kaygı", "stres", "panik atak",
    "migren", "vertigo",
    "gastrit", "ülser", "reflü", "mide",
    "böbrek", "karaciğer", "safra",
    "tiroid", "guatr",
    "artrit", "romatizma", "kireçlenme",
    "covid", "korona", "koronavirüs",
    // Medical terms
    "tedavi", "ilaç", "hap", "şurup", "krem", "merhem",
    "doktor", "hekim", "hastane", "klinik", "acil",
    "ameliyat", "operasyon", "cerrahi",
    "tahlil", "test", "tetkik", "röntgen", "mr", "tomografi", "ultrason",
    "aşı", "aşılama",
    "reçete", "antibiyotik", "ağrı kesici",
    "vitamin", "mineral", "takviye",
    "tanı", "teşhis",
    "kronik", "akut",
    "bağışıklık", "immün",
    // Body parts
    "boğaz", "bademcik", "kulak", "göz", "burun", "diş", "dişeti",
    "akciğer", "bağırsak", "kolon",
    "eklem", "kas", "kemik", "omurga",
    "cilt", "deri", "saç dökülme",
    // Health questions
    "ne yapmalı", "ne zaman doktora", "doktora gitmeli", "tehlikeli mi",
    "normal mi", "endişelenmeli", "acil mi", "ciddi mi",
    "bulaşıcı mı", "geçer mi", "ne kadar sürer",
    "iyi gelir", "zararlı mı", "yan etki",
];

/// Decisive off-topic evidence. One hit with no health signal rejects.
pub static HARD_NON_HEALTH_KEYWORDS: &[&str] = &[
    // Cooking
    "yemek tarifi", "tarifi", "çorba tarifi", "nasıl yapılır yemek", "restoran önerisi",
    // Sports
    "maç skoru", "maç sonucu", "süper lig", "şampiyonlar ligi", "futbol", "basketbol",
    "teknik direktör", "penaltı",
    // Technology
    "telefon önerisi", "bilgisayar önerisi", "laptop", "uygulama önerisi",
    "oyun önerisi", "yazılım", "programlama", "kod yaz", "python", "javascript",
    // Entertainment and daily life
    "hava durumu", "film önerisi", "dizi önerisi", "kitap önerisi", "müzik önerisi",
    "şarkı sözleri", "çeviri yap", "uçak bileti",
    // Politics and finance
    "politika", "cumhurbaşkanı", "başbakan", "borsa", "kripto", "bitcoin",
    // Divination
    "astroloji", "burç yorumu", "rüya tabiri", "kahve falı",
    // Science
    "kara delik", "gezegen", "galaksi", "büyük patlama", "big bang",
    "güneş sistemi", "asteroid", "kuyruklu yıldız",
    "denklem", "integral", "türev", "fizik formül",
    // History and geography
    "dünya savaşı", "osmanlı", "tarihte", "hangi yılda",
    "başkenti", "nüfusu kaç", "hangi kıtada",
];

/// Contextual off-topic signal. Counted and logged, never decisive alone.
pub static SOFT_NON_HEALTH_KEYWORDS: &[&str] = &[
    "tarif", "malzemeler", "pişir", "fırın", "tencere", "tava", "ocak",
    "makarna", "pilav", "kek", "pasta", "kurabiye", "yemek yap", "aşçı", "mutfak",
    "lig", "şampiyon", "transfer", "gol",
    "tablet", "tercüme",
    "fiyat", "ne kadar", "kaç para", "ucuz", "pahalı",
    "tatil", "otel", "seyahat",
    "araba", "otomobil", "motor", "benzin",
    "seçim", "parti", "dolar", "euro",
    "burç", "fal", "uzay",
    "hava nasıl", "sıcaklık kaç derece",
];

// ── Greetings ───────────────────────────────────────────────

pub static GREETING_HELLO: &[&str] = &[
    "selam", "merhaba", "günaydın", "iyi günler", "iyi akşamlar",
    "hey", "sa", "slm", "mrb", "selamlar",
];

pub static GREETING_HOWRU: &[&str] = &[
    "nasılsın", "naber", "nasıl gidiyor", "ne haber", "nabır",
    "ne var ne yok", "naptın", "nasıl hissediyorsun",
];

pub static GREETING_THANKS: &[&str] = &[
    "teşekkür", "teşekkürler", "sağol", "sağ ol", "eyvallah",
    "çok teşekkürler", "teşekkür ederim", "minnettarım",
];

pub static GREETING_BYE: &[&str] = &[
    "görüşürüz", "hoşça kal", "bye", "bb", "hoşçakal",
    "iyi geceler", "kendine iyi bak",
];

pub static GREETING_TRUST: &[&str] = &[
    "sana güvenebilir miyim", "güvenilir misin", "sen gerçek doktor",
    "sen doktor musun", "sen kimsin", "ne yapabilirsin",
    "yapay zeka mısın", "robot musun", "sen nesin",
    "yeteneklerin", "ne biliyorsun",
];

/// Greeting entries short enough to occur inside unrelated words
/// ("sa" in "sağlık"). These only match as whole tokens.
pub static SHORT_GREETING_TOKENS: &[&str] = &["sa", "slm", "mrb", "bb", "hey", "bye"];
