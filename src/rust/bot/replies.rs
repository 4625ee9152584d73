//! User-facing reply texts. The bot speaks Turkish.

use crate::classifier::Prediction;
use crate::knowledge::{Category, KnowledgeBase};

use super::commands::Command;

pub const NO_ATTACHMENT: &str = "Lütfen tahmin etmek için bir fotoğraf ekleyin.";
pub const NOT_AN_IMAGE: &str = "Lütfen bir fotoğraf dosyası eklediğinizden emin olun.";
pub const ATTACHMENT_FAILED: &str = "Fotoğrafı işlemek mümkün olmadı.";
pub const REMOTE_IMAGE_FAILED: &str = "Sitedeki fotoğraf işlenemedi.";

pub fn hello(bot_name: &str) -> String {
    format!("Merhaba! Ben {}, bir Discord PC parça botuyum!", bot_name)
}

pub fn easter_egg(bot_name: &str) -> String {
    format!("Hey {}, bugün bir kod yok. Sonra tekrar dene!", bot_name)
}

pub fn attachment_prediction(prediction: &Prediction) -> String {
    format!(
        "Bu bir **{}** ve ben bunu **{:.2}** güvenle söylüyorum.",
        prediction.label, prediction.confidence
    )
}

pub fn remote_prediction(prediction: &Prediction) -> String {
    format!(
        "Sitedeki fotoğraf bir **{}** gibi gözüküyor. Ve ben bunu **{:.2}** güvenle söylüyorum.",
        prediction.label, prediction.confidence
    )
}

pub fn bad_status(status: u16) -> String {
    format!("Sitedeki fotoğrafı yüklemek mümkün olmadı. Durum kodu: {}", status)
}

pub fn connect_failed(details: &str) -> String {
    format!(
        "Belirtilen URL'ye bağlanılamadı: {}. Lütfen URL'nin doğru olduğundan emin olun.",
        details
    )
}

pub fn request_failed(details: &str) -> String {
    format!("Bir problem oldu: {}", details)
}

pub fn info_not_found(query: &str, knowledge: &KnowledgeBase) -> String {
    format!(
        "Üzgünüm, **{}** hakkında bilgi bulamadım. Şu an için bilgi sağlayabildiğim parçalar: {}. \
         Lütfen listedeki isimleri kullanmaya çalışın.",
        query,
        knowledge.supported_list()
    )
}

pub fn usage(prefix: &str, command: Command) -> String {
    format!("Kullanım: `{}{}`", prefix, command.syntax())
}

pub fn help(prefix: &str) -> String {
    let mut text = String::from(
        "Aşağıdaki komut ve sintakslar **ByteSight** discord botu için özelleştirilmiştir!\n\n**Komutlar:**\n",
    );
    for command in Command::ALL {
        if let Some(summary) = command.summary() {
            text.push_str(&format!("`{}{}` - {}\n", prefix, command.syntax(), summary));
        }
    }

    text.push_str("\n**Kullanım Örnekleri:**\n");
    text.push_str(&format!("`{}predict` (ve bir resim ekleyin)\n", prefix));
    text.push_str(&format!(
        "`{}net_predict https://example.com/some_pc_part.jpg`\n",
        prefix
    ));
    text.push_str(&format!(
        "`{0}info (parça ismi)` - Örneğin - `{0}info CPU`\n\n",
        prefix
    ));
    text.push_str(
        "**Kullanırken dikkat edin! Gönderilen fotoğraflarda nesnenin resimde yalnız olduğundan emin olun. \
         Aksi taktirde yanlış cevap verme olasılığı daha yüksek!**\n\n",
    );

    text.push_str("Neleri tanıyabilirsiniz:\n");
    for (i, category) in Category::ALL.iter().enumerate() {
        text.push_str(&format!("{} {}\n", i, category.help_label()));
    }
    text.push_str("\n**Bu discord botu AI kullanmaktadır. Yanlış cevap verebilir!**");
    text
}
