//! Static message templates for every display language the plugin ships.
//!
//! Templates are Telegram HTML, custom-emoji tags included. The instruction
//! prefix sent to the model is *not* here: it is fixed and non-localized
//! ([`crate::openai::REWRITE_PREFIX`]).

/// Display languages with a complete string table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Ru,
    Es,
    Fr,
    De,
    Tr,
    Uz,
    It,
}

impl Lang {
    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::Ru => &RU,
            Lang::Es => &ES,
            Lang::Fr => &FR,
            Lang::De => &DE,
            Lang::Tr => &TR,
            Lang::Uz => &UZ,
            Lang::It => &IT,
        }
    }
}

/// Message table for one display language.
pub struct Strings {
    /// Shown when the command is invoked with no text.
    pub no_args: &'static str,
    /// Echo of the user's question; `{question}` placeholder.
    pub question: &'static str,
    /// Wrapper for the final reply body; `{answer}` placeholder.
    pub answer: &'static str,
    /// Placeholder displayed while the request is in flight.
    pub loading: &'static str,
    /// Shown when no API key is configured.
    pub no_api_key: &'static str,
    /// Generic failure notice for transport or response-shape errors.
    pub request_failed: &'static str,
}

impl Strings {
    pub fn render_question(&self, question: &str) -> String {
        self.question.replace("{question}", question)
    }

    pub fn render_answer(&self, answer: &str) -> String {
        self.answer.replace("{answer}", answer)
    }
}

static EN: Strings = Strings {
    no_args: "<emoji document_id=5312526098750252863>🚫</emoji> <b>No arguments provided</b>",
    question: "<emoji document_id=5974038293120027938>👤</emoji> <b>Question:</b> {question}\n",
    answer: "{answer}",
    loading: "<code>Loading...</code>",
    no_api_key: "<b>🚫 No API key provided</b>\n<i><emoji \
                 document_id=5199682846729449178>ℹ️</emoji> Get it from official OpenAI website \
                 and add it to config</i>",
    request_failed: "<b>🚫 Request failed</b>\n<i>Could not reach the OpenAI API, try again \
                     later</i>",
};

static RU: Strings = Strings {
    no_args: "<emoji document_id=5312526098750252863>🚫</emoji> <b>Не указаны аргументы</b>",
    question: "<emoji document_id=5974038293120027938>👤</emoji> <b>Вопрос:</b> {question}\n",
    answer: "{answer}",
    loading: "<code>Загрузка...</code>",
    no_api_key: "<b>🚫 Не указан API ключ</b>\n<i><emoji \
                 document_id=5199682846729449178>ℹ️</emoji> Получите его на официальном сайте \
                 OpenAI и добавьте в конфиг</i>",
    request_failed: "<b>🚫 Запрос не выполнен</b>\n<i>Не удалось связаться с API OpenAI, \
                     попробуйте позже</i>",
};

static ES: Strings = Strings {
    no_args: "<emoji document_id=5312526098750252863>🚫</emoji> <b>No se han proporcionado \
              argumentos</b>",
    question: "<emoji document_id=5974038293120027938>👤</emoji> <b>Pregunta:</b> {question}\n",
    answer: "{answer}",
    loading: "<code>Cargando...</code>",
    no_api_key: "<b>🚫 No se ha proporcionado una clave API</b>\n<i><emoji \
                 document_id=5199682846729449178>ℹ️</emoji> Obtenga una en el sitio web oficial \
                 de OpenAI y agréguela a la configuración</i>",
    request_failed: "<b>🚫 La solicitud ha fallado</b>\n<i>No se pudo conectar con la API de \
                     OpenAI, inténtelo más tarde</i>",
};

static FR: Strings = Strings {
    no_args: "<emoji document_id=5312526098750252863>🚫</emoji> <b>Aucun argument fourni</b>",
    question: "<emoji document_id=5974038293120027938>👤</emoji> <b>Question:</b> {question}\n",
    answer: "{answer}",
    loading: "<code>Chargement...</code>",
    no_api_key: "<b>🚫 Aucune clé API fournie</b>\n<i><emoji \
                 document_id=5199682846729449178>ℹ️</emoji> Obtenez-en un sur le site officiel \
                 d'OpenAI et ajoutez-le à la configuration</i>",
    request_failed: "<b>🚫 La requête a échoué</b>\n<i>Impossible de joindre l'API OpenAI, \
                     réessayez plus tard</i>",
};

static DE: Strings = Strings {
    no_args: "<emoji document_id=5312526098750252863>🚫</emoji> <b>Keine Argumente angegeben</b>",
    question: "<emoji document_id=5974038293120027938>👤</emoji> <b>Frage:</b> {question}\n",
    answer: "{answer}",
    loading: "<code>Laden...</code>",
    no_api_key: "<b>🚫 Kein API-Schlüssel angegeben</b>\n<i><emoji \
                 document_id=5199682846729449178>ℹ️</emoji> Holen Sie sich einen auf der \
                 offiziellen OpenAI-Website und fügen Sie ihn der Konfiguration hinzu</i>",
    request_failed: "<b>🚫 Anfrage fehlgeschlagen</b>\n<i>Die OpenAI-API war nicht erreichbar, \
                     versuchen Sie es später erneut</i>",
};

static TR: Strings = Strings {
    no_args: "<emoji document_id=5312526098750252863>🚫</emoji> <b>Argümanlar verilmedi</b>",
    question: "<emoji document_id=5974038293120027938>👤</emoji> <b>Soru:</b> {question}\n",
    answer: "{answer}",
    loading: "<code>Yükleniyor...</code>",
    no_api_key: "<b>🚫 API anahtarı verilmedi</b>\n<i><emoji \
                 document_id=5199682846729449178>ℹ️</emoji> OpenAI'nın resmi websitesinden alın \
                 ve yapılandırmaya ekleyin</i>",
    request_failed: "<b>🚫 İstek başarısız oldu</b>\n<i>OpenAI API'sine ulaşılamadı, daha sonra \
                     tekrar deneyin</i>",
};

static UZ: Strings = Strings {
    no_args: "<emoji document_id=5312526098750252863>🚫</emoji> <b>Argumentlar ko'rsatilmadi</b>",
    question: "<emoji document_id=5974038293120027938>👤</emoji> <b>Savol:</b> {question}\n",
    answer: "{answer}",
    loading: "<code>Yuklanmoqda...</code>",
    no_api_key: "<b>🚫 API kalit ko'rsatilmadi</b>\n<i><emoji \
                 document_id=5199682846729449178>ℹ️</emoji> Ofitsial OpenAI veb-saytidan oling</i>",
    request_failed: "<b>🚫 So'rov bajarilmadi</b>\n<i>OpenAI API bilan bog'lanib bo'lmadi, \
                     keyinroq urinib ko'ring</i>",
};

static IT: Strings = Strings {
    no_args: "<emoji document_id=5312526098750252863>🚫</emoji> <b>Nessun argomento fornito</b>",
    question: "<emoji document_id=5974038293120027938>👤</emoji> <b>Domanda:</b> {question}\n",
    answer: "{answer}",
    loading: "<code>Caricamento...</code>",
    no_api_key: "<b>🚫 Nessuna chiave API fornita</b>\n<i><emoji \
                 document_id=5199682846729449178>ℹ️</emoji> Ottienila dal sito ufficiale di \
                 OpenAI e aggiungila al tuo file di configurazione</i>",
    request_failed: "<b>🚫 Richiesta non riuscita</b>\n<i>Impossibile raggiungere l'API di \
                     OpenAI, riprova più tardi</i>",
};
