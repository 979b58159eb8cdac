// src/services/chatbot.rs
use crate::message::ChatResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    NewConstruction,
    Maintenance,
    Safety,
    Emergency,
    OutOfScope,
    QuoteRequest,
    Coverage,
    Fallback,
}

struct Rule {
    triggers: &'static [&'static str],
    intent: Intent,
}

// Evaluated top to bottom, first hit wins.
// NOTE: "kl" also matches inside ordinary words ("klokken", "klar"). Kept as is
// until product decides whether signalling questions need a stricter trigger.
const RULES: &[Rule] = &[
    Rule { triggers: &["hei", "hallo", "heisann", "god dag"], intent: Intent::Greeting },
    Rule { triggers: &["nybygg", "ny bygg"], intent: Intent::NewConstruction },
    Rule { triggers: &["vedlikehold"], intent: Intent::Maintenance },
    Rule { triggers: &["sikkerhet", "sha"], intent: Intent::Safety },
    Rule { triggers: &["beredskap", "uhell", "akutt"], intent: Intent::Emergency },
    Rule { triggers: &["kl", "kontaktledning", "signal"], intent: Intent::OutOfScope },
    Rule {
        triggers: &["tilbud", "befaring", "kontakt", "e-post", "telefon"],
        intent: Intent::QuoteRequest,
    },
    Rule { triggers: &["område", "region", "hvor", "dekker"], intent: Intent::Coverage },
];

impl Intent {
    /// Stable label used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::NewConstruction => "new_construction",
            Intent::Maintenance => "maintenance",
            Intent::Safety => "safety",
            Intent::Emergency => "emergency",
            Intent::OutOfScope => "out_of_scope",
            Intent::QuoteRequest => "quote_request",
            Intent::Coverage => "coverage",
            Intent::Fallback => "fallback",
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            Intent::Greeting => {
                "Hei! Hva kan vi hjelpe deg med i dag? Vi tilbyr nybygg, vedlikehold, sikkerhet og beredskap innen jernbane."
            }
            Intent::NewConstruction => {
                "Nybygg: Vi prosjekterer og bygger nye jernbaneanlegg og spor. Vi håndterer planlegging, logistikk, bygging og kvalitetssikring, med fokus på sikker fremdrift og levering til avtalt tid."
            }
            Intent::Maintenance => {
                "Vedlikehold: Vi utfører forebyggende og korrektivt vedlikehold på spor. Arbeidet tilpasses trafikk og sikkerhetskrav, med dokumentasjon etter ferdigstillelse."
            }
            Intent::Safety => {
                "Sikkerhet: Vi følger strenge prosedyrer, risikovurderer oppdrag og bruker sertifisert personell. HMS og kvalitet står alltid først."
            }
            Intent::Emergency => {
                "Beredskap: Vi tilbyr døgnkontinuerlig beredskap for uforutsette hendelser, med rask mobilisering av mannskap og utstyr for å sikre og gjenåpne strekninger."
            }
            Intent::OutOfScope => {
                "Vi fokuserer på nybygg, vedlikehold, sikkerhet og beredskap. KL- og signalarbeid inngår ikke i vårt tilbud per nå."
            }
            Intent::QuoteRequest => {
                "For tilbud eller befaring: Send oss en melding via kontaktskjemaet nedenfor, så svarer vi raskt. Legg gjerne ved kort beskrivelse av oppdraget og ønsket tidsramme."
            }
            Intent::Coverage => {
                "Vi leverer oppdrag over hele Norge. Mobil gjennomføring med mannskap og utstyr etter behov."
            }
            Intent::Fallback => {
                "Jeg forstår. Kan du beskrive behovet litt nærmere? Vi kan hjelpe med nybygg, vedlikehold, sikkerhet og beredskap innen jernbane."
            }
        }
    }

    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Intent::Greeting => &[
                "Fortell meg om nybygg",
                "Hvordan fungerer vedlikehold?",
                "Hva innebærer sikkerhet?",
                "Har dere beredskap 24/7?",
            ],
            Intent::NewConstruction => &["Kan jeg få et tilbud?", "Hvilke regioner dekker dere?"],
            Intent::Maintenance => &["Kan dere nattarbeid?", "Hva er responstiden deres?"],
            Intent::Safety => &[
                "Hvilke sertifiseringer har dere?",
                "Hvordan planlegger dere sikker jobbanalyse?",
            ],
            Intent::Emergency => &["Hvordan kontakter jeg beredskap?", "Dekker dere hele Norge?"],
            Intent::OutOfScope => &["Fortell om nybygg", "Hva med vedlikehold?"],
            Intent::QuoteRequest => &["Hvor raskt kan dere starte?", "Hvilke områder dekker dere?"],
            Intent::Coverage => &["Kan dere nattarbeid?", "Gi meg et tilbud"],
            Intent::Fallback => &[
                "Fortell om nybygg",
                "Hvordan fungerer vedlikehold?",
                "Hva innebærer sikkerhet?",
                "Har dere beredskap 24/7?",
            ],
        }
    }

    pub fn response(self) -> ChatResponse {
        ChatResponse {
            reply: self.reply().to_string(),
            suggestions: self.suggestions().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Trim and lowercase. Punctuation, diacritics and inner whitespace are kept.
pub fn normalize(msg: &str) -> String {
    msg.trim().to_lowercase()
}

pub fn detect_intent(msg: &str) -> Intent {
    let text = normalize(msg);

    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| text.contains(t)))
        .map_or(Intent::Fallback, |rule| rule.intent)
}

/// Pure and total: every input, the empty string included, gets a reply.
pub fn respond(msg: &str) -> ChatResponse {
    detect_intent(msg).response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_only_trims_and_lowercases() {
        assert_eq!(normalize("  Hei,  DER!  "), "hei,  der!");
        assert_eq!(normalize("ØST"), "øst");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn every_intent_has_reply_and_suggestions() {
        let all = [
            Intent::Greeting,
            Intent::NewConstruction,
            Intent::Maintenance,
            Intent::Safety,
            Intent::Emergency,
            Intent::OutOfScope,
            Intent::QuoteRequest,
            Intent::Coverage,
            Intent::Fallback,
        ];
        for intent in all {
            assert!(!intent.reply().is_empty(), "{:?}", intent);
            let n = intent.suggestions().len();
            assert!((2..=4).contains(&n), "{:?} has {} suggestions", intent, n);
        }
    }

    #[test]
    fn rule_table_skips_fallback() {
        assert!(RULES.iter().all(|r| r.intent != Intent::Fallback));
        assert_eq!(RULES.len(), 8);
    }
}
