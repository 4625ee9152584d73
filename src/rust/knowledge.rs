//! Static descriptions of the PC parts the bot recognises, and the alias
//! rules that map free-form user text (English or Turkish) onto them.

use std::fmt;

/// One of the nine hardware classes the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cpu,
    Gpu,
    Ram,
    Motherboard,
    SataSsd,
    NvmeSsd,
    Hdd,
    Psu,
    AirCooling,
}

impl Category {
    /// All categories in classifier output order.
    pub const ALL: [Category; 9] = [
        Category::Cpu,
        Category::Gpu,
        Category::Ram,
        Category::Motherboard,
        Category::SataSsd,
        Category::NvmeSsd,
        Category::Hdd,
        Category::Psu,
        Category::AirCooling,
    ];

    /// Upper-case canonical key used for knowledge-base lookups.
    pub const fn key(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Ram => "RAM",
            Category::Motherboard => "MOTHERBOARD",
            Category::SataSsd => "SATA SSD",
            Category::NvmeSsd => "NVME SSD",
            Category::Hdd => "HDD",
            Category::Psu => "PSU",
            Category::AirCooling => "AIR COOLING",
        }
    }

    /// Name as shown to users in lists.
    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Ram => "RAM",
            Category::Motherboard => "Motherboard",
            Category::SataSsd => "SATA SSD",
            Category::NvmeSsd => "NVMe SSD",
            Category::Hdd => "HDD",
            Category::Psu => "PSU",
            Category::AirCooling => "Air Cooling",
        }
    }

    /// Line used in the `help` category list.
    pub const fn help_label(self) -> &'static str {
        match self {
            Category::Cpu => "CPU (Central Processing Unit)",
            Category::Gpu => "GPU (Graphics Processing Unit)",
            Category::Ram => "RAM (Random Access Memory)",
            Category::Motherboard => "Motherboard",
            Category::SataSsd => "Sata SSD",
            Category::NvmeSsd => "NVMe SSD",
            Category::Hdd => "HDD",
            Category::Psu => "PSU (Power Supply)",
            Category::AirCooling => "Air Cooling (Hava Soğutma)",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    const fn description(self) -> &'static str {
        match self {
            Category::Cpu => concat!(
                "**CPU, Merkezi İşlem Birimi (Central Processing Unit) anlamına gelir.**\n",
                "Bilgisayarın **beyni** olarak da bilinen bu birim, bir bilgisayar sistemindeki temel hesaplama işlemlerini gerçekleştiren donanım bileşenidir.\n",
                "CPU, talimatları işler, verileri işler ve bilgisayarın diğer tüm bileşenlerinin koordineli bir şekilde çalışmasını sağlar."
            ),
            Category::Gpu => concat!(
                "**GPU, Grafik İşlem Birimi (Graphics Processing Unit) anlamına gelir.**\n",
                "Özellikle grafik ve görsel hesaplamalar için tasarlanmıştır. Oyunlar, video düzenleme ve 3D modelleme gibi grafik ağırlıklı işlerde kullanılır.\n",
                "Görüntüleri hızlı bir şekilde işleyerek ekranınızda görmenizi sağlar."
            ),
            Category::Ram => concat!(
                "**RAM, Rastgele Erişimli Bellek (Random Access Memory) anlamına gelir.**\n",
                "Bilgisayarın o an aktif olarak kullandığı verileri geçici olarak depolayan hızlı bir bellek türüdür.\n",
                "Uygulamaların hızlı çalışmasını ve çoklu görev yapabilmeyi sağlar. Bilgisayar kapatıldığında içindeki veriler silinir."
            ),
            Category::Motherboard => concat!(
                "**Anakart (Motherboard), bilgisayarın tüm temel bileşenlerini birbirine bağlayan ana devre kartıdır.**\n",
                "CPU, RAM, GPU, depolama aygıtları ve diğer çevre birimlerinin iletişim kurmasını sağlar.\n",
                "Bilgisayarın omurgası gibidir."
            ),
            Category::SataSsd => concat!(
                "**SATA SSD, Serial ATA arayüzünü kullanan bir Katı Hal Sürücüsüdür (Solid State Drive).**\n",
                "Geleneksel HDD'lere göre çok daha hızlı veri okuma/yazma hızları sunar ve hareketli parçaları olmadığı için daha dayanıklıdır.\n",
                "Çoğu masaüstü ve dizüstü bilgisayarda depolama çözümü olarak kullanılır."
            ),
            Category::NvmeSsd => concat!(
                "**NVMe SSD, Non-Volatile Memory Express arayüzünü kullanan bir Katı Hal Sürücüsüdür (Solid State Drive).**\n",
                "SATA SSD'lerden çok daha yüksek hızlar sunar çünkü doğrudan PCIe slotlarına takılarak anakart ile daha hızlı iletişim kurar.\n",
                "Yüksek performans gerektiren uygulamalar ve oyunlar için idealdir."
            ),
            Category::Hdd => concat!(
                "**HDD, Sabit Disk Sürücüsü (Hard Disk Drive) anlamına gelir.**\n",
                "Verileri manyetik plakalar üzerinde depolayan geleneksel bir depolama aygıtıdır. Yüksek kapasiteleri uygun maliyetle sunar.\n",
                "SSD'lere göre daha yavaştır ve hareketli parçaları olduğu için darbelere karşı daha hassastır."
            ),
            Category::Psu => concat!(
                "**PSU, Güç Kaynağı Birimi (Power Supply Unit) anlamına gelir.**\n",
                "Bilgisayarın tüm bileşenlerine doğru voltajda ve miktarda elektrik gücü sağlayan donanım bileşenidir.\n",
                "Bilgisayarın kararlı çalışması için hayati öneme sahiptir."
            ),
            Category::AirCooling => concat!(
                "**Hava Soğutma (Air Cooling), bilgisayar bileşenlerini, özellikle CPU'yu, ısıyı dağıtmak için hava akımını kullanan bir soğutma yöntemidir.**\n",
                "Genellikle bir soğutucu blok (heat sink) ve bir veya daha fazla fan içerir. Isıyı bileşenden alıp havaya aktarır."
            ),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Substring rules checked in order against the upper-cased query.
///
/// Multi-word names come before the short acronyms so that, for example,
/// "SATA SSD" is never claimed by a generic rule further down.
pub const ALIAS_RULES: &[(&str, Category)] = &[
    ("AIR COOLING", Category::AirCooling),
    ("HAVA SOĞUTMA", Category::AirCooling),
    ("SATA SSD", Category::SataSsd),
    ("NVME SSD", Category::NvmeSsd),
    ("HDD", Category::Hdd),
    ("PSU", Category::Psu),
    ("RAM", Category::Ram),
    ("GPU", Category::Gpu),
    ("EKRAN KARTI", Category::Gpu),
    ("CPU", Category::Cpu),
    ("İŞLEMCİ", Category::Cpu),
    // `str::to_uppercase` maps the Turkish dotted `i` to a plain `I`
    ("IŞLEMCI", Category::Cpu),
    ("MOTHERBOARD", Category::Motherboard),
    ("ANAKART", Category::Motherboard),
];

/// First alias rule whose pattern occurs in the already upper-cased `upper`.
fn match_alias(upper: &str) -> Option<Category> {
    ALIAS_RULES
        .iter()
        .find(|(pattern, _)| upper.contains(pattern))
        .map(|&(_, category)| category)
}

/// Read-only lookup table from category key to its description.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeBase;

impl KnowledgeBase {
    pub const fn new() -> Self {
        Self
    }

    /// Maps free text to a canonical category key.
    ///
    /// Returns the first alias rule's key whose pattern occurs in the
    /// upper-cased query, or the upper-cased query itself when nothing
    /// matches.
    pub fn resolve(&self, query: &str) -> String {
        let upper = query.to_uppercase();
        match_alias(&upper)
            .map(|c| c.key().to_string())
            .unwrap_or(upper)
    }

    /// The category the alias rules pick for `query`, if any.
    pub fn resolve_category(&self, query: &str) -> Option<Category> {
        match_alias(&query.to_uppercase())
    }

    /// Direct read of the description stored under `key`.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        Category::from_key(key).map(Category::description)
    }

    /// Comma separated display names of every supported category.
    pub fn supported_list(&self) -> String {
        Category::ALL
            .iter()
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_aliases() {
        let kb = KnowledgeBase::new();
        assert_eq!(kb.resolve("hava soğutma"), "AIR COOLING");
        assert_eq!(kb.resolve("Ekran kartı"), "GPU");
        assert_eq!(kb.resolve("İŞLEMCİ"), "CPU");
        assert_eq!(kb.resolve("işlemci"), "CPU");
        assert_eq!(kb.resolve("anakart"), "MOTHERBOARD");
    }

    #[test]
    fn test_earlier_rule_wins() {
        let kb = KnowledgeBase::new();
        // both HDD and RAM occur; HDD is listed first
        assert_eq!(kb.resolve("hdd or ram?"), "HDD");
        assert_eq!(kb.resolve("cpu air cooling"), "AIR COOLING");
    }

    #[test]
    fn test_resolve_category_agrees_with_resolve() {
        let kb = KnowledgeBase::new();
        for query in ["nvme ssd", "Ekran Kartı", "işlemci", "psu", "water loop"] {
            let key = kb.resolve(query);
            assert_eq!(kb.resolve_category(query), Category::from_key(&key), "{}", query);
        }
        assert_eq!(kb.resolve_category("water loop"), None);
    }

    #[test]
    fn test_from_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("cpu"), None);
    }

    #[test]
    fn test_supported_list() {
        assert_eq!(
            KnowledgeBase::new().supported_list(),
            "CPU, GPU, RAM, Motherboard, SATA SSD, NVMe SSD, HDD, PSU, Air Cooling"
        );
    }
}
