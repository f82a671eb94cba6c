//! Venus placements: love, values, and attraction.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Venus,
        title: "ARIES",
        subtitle: Some("Venus in Aries"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Aries loves at first sight or not at all, and announces it either way. Pursuit is the romance; the chase is not a phase but a love language. You would rather be refused today than wondered about for a season.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You prize nerve, independence, and partners who remain slightly uncatchable. Boredom is the only infidelity you cannot forgive. Grand gestures beat long letters; doing beats discussing.",
            },
        ],
        traits: &["ardent", "impulsive", "chivalrous", "restless"],
        strengths: &["fearless declarations", "keeps romance kinetic", "no games, no guessing"],
        challenges: &["cools when the chase ends", "impatience with slow burns", "competes inside the couple"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Venus,
        title: "TAURUS",
        subtitle: Some("Venus in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus rules Taurus, and here love is at full strength and room temperature: steady, sensual, and in no hurry whatsoever. You court with meals, playlists, and presence. Once attached, you stay attached past all reasonable exits.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value constancy, comfort, and things that improve with age, partners included. Luxury is not greed; it is quality worship. Flightiness, however charming, is disqualifying.",
            },
        ],
        traits: &["devoted", "sensual", "possessive", "unhurried"],
        strengths: &["loyalty as a fixed asset", "romance of the senses", "love that keeps its word"],
        challenges: &["possession creeps in", "ruts mistaken for rhythm", "letting go takes years"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Venus,
        title: "GEMINI",
        subtitle: Some("Venus in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Gemini falls for minds first and checks for the rest later. Flirtation is conversation with better lighting; the partner who keeps surprising you keeps you. Love must stay interesting or it quietly stops being love.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value wit, novelty, and a partner who is also excellent company in the group chat. Variety is not infidelity of the heart, merely circulation. Heaviness without humor suffocates your affection fastest.",
            },
        ],
        traits: &["playful", "verbal", "curious", "changeable"],
        strengths: &["keeps love entertaining", "flirts fluently for life", "friendship inside the romance"],
        challenges: &["attention drifts", "depth postponed", "talks about feelings instead of feeling them"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Venus,
        title: "CANCER",
        subtitle: Some("Venus in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Cancer loves by adoption: you do not date people so much as take them in. Affection is expressed in care — the favorite dish remembered, the safe harbor maintained. Vulnerability is offered in careful installments and guarded like pearls.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value emotional security, history, and partners who phone their families or at least explain why not. Home is the ultimate love letter. Casualness about the relationship reads as casualness about you.",
            },
        ],
        traits: &["tender", "loyal", "protective", "sentimental"],
        strengths: &["devotion with deep roots", "care as fluent language", "builds a real home around love"],
        challenges: &["clings under threat", "hurt goes into the shell", "tests instead of asking"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Venus,
        title: "LEO",
        subtitle: Some("Venus in Leo"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Leo loves in technicolor. Romance is ceremony: the grand reveal, the public toast, the anniversary produced like an awards show. You are generous to a fault and loyal to the final curtain, provided the applause is mutual.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value adoration, splendor, and a partner proud to be seen with you — discretion in love strikes you as suspicious. Shabby treatment of waiters or of you is a closing argument. Your heart wants an audience and deserves one.",
            },
        ],
        traits: &["grand", "devoted", "demonstrative", "proud"],
        strengths: &["romance as celebration", "fierce public loyalty", "generosity without ledger"],
        challenges: &["needs constant billing", "jealous of the spotlight", "drama as proof of love"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Venus,
        title: "VIRGO",
        subtitle: Some("Venus in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Virgo loves in maintenance mode: quietly, precisely, and with the tire pressure checked. Devotion is logistical — you notice needs before they are spoken and handle them without invoicing. Declarations embarrass you; deeds do not.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value competence, cleanliness of intention, and partners who improve under honest feedback, as you aim to. Flattery reads as error. The one you love is the one whose problems you have already started solving.",
            },
        ],
        traits: &["attentive", "modest", "discerning", "practical"],
        strengths: &["love expressed in upkeep", "sees the real person, flaws filed fairly", "reliability as romance"],
        challenges: &["critique at close range", "affection undersold", "perfect partner myth"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Venus,
        title: "LIBRA",
        subtitle: Some("Venus in Libra"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus rules Libra, and here love is an art form practiced daily: courtship with correct lighting, anniversaries in the calendar before the second date. You are in love with partnership itself and gifted at its choreography.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value beauty, reciprocity, and the absence of scenes. Fairness is romantic; rudeness is a dealbreaker in any font. Alone is a condition you treat promptly.",
            },
        ],
        traits: &["romantic", "gracious", "partnership-driven", "appeasing"],
        strengths: &["makes love beautiful", "fairness kept current", "conflict handled with silk gloves"],
        challenges: &["peace purchased with silence", "in love with the idea of love", "cannot be single gracefully"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Venus,
        title: "SCORPIO",
        subtitle: Some("Venus in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Scorpio loves at depth or not at all. Attraction is instant and investigated; intimacy is total and notarized. You offer everything and expect everything, and 'casual' is a word other people use.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value loyalty proven under pressure, privacy as a couple's sovereign territory, and truth with the armor off. Betrayal is not an argument; it is an era. What you keep, you keep completely.",
            },
        ],
        traits: &["intense", "devoted", "possessive", "private"],
        strengths: &["intimacy without false bottoms", "loyalty of the vault", "passion that does not dilute"],
        challenges: &["jealousy runs deep channels", "tests loyalty covertly", "endings become campaigns"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Venus,
        title: "SAGITTARIUS",
        subtitle: Some("Venus in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Sagittarius loves with the windows open. Romance is an expedition — the best dates require passports or at least new postcodes. You adore freely and honestly, and flee cages built from even the finest intentions.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value humor, honesty, and a partner with their own compass. Jealousy strikes you as a navigation error. The couple that explores together, in miles or ideas, keeps you gladly aboard.",
            },
        ],
        traits: &["adventurous", "candid", "buoyant", "unpossessive"],
        strengths: &["love without surveillance", "laughter as glue", "honesty from day one"],
        challenges: &["commitment phrased loosely", "bolts at heaviness", "bluntness bruises romance"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Venus,
        title: "CAPRICORN",
        subtitle: Some("Venus in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Capricorn loves like an estate is planned: deliberately, for generations. Courtship is due diligence with candlelight; commitment, once signed, is executed in full. You are slow to say it and permanent once said.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value reliability, ambition, and affection that shows up in deeds and durable goods. Public composure matters; private tenderness is real and strictly off the record. Frivolity is forgivable in others, briefly.",
            },
        ],
        traits: &["steadfast", "reserved", "traditional", "providing"],
        strengths: &["commitment with structural integrity", "builds wealth and safety around love", "word as bond"],
        challenges: &["romance on a delivery schedule", "status weighs on the shortlist", "tenderness heavily encrypted"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Venus,
        title: "AQUARIUS",
        subtitle: Some("Venus in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus in Aquarius loves its best friend, ideally the same person it is dating. Affection is frequent, original, and allergic to script; possessiveness voids the warranty. You love people most reliably from one respectful step away.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value independence, ideas, and partners who remain interesting as people, not just as partners. Convention must audition like everything else. The couple should improve the world, or at least its group chat.",
            },
        ],
        traits: &["friendly", "unconventional", "independent", "cool-burning"],
        strengths: &["friendship as foundation", "zero possessiveness", "loves the actual person, not the role"],
        challenges: &["distance reads as indifference", "feelings routed through theory", "commitment kept abstract"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Venus,
        title: "PISCES",
        subtitle: Some("Venus in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("In Love"),
                content: "Venus is exalted in Pisces: love here is oceanic, unconditional, and occasionally unadvised. You fall for souls, potentials, and sad stories, and you forgive on credit. Romance is a devotion bordering on liturgy.",
            },
            ContentSection {
                heading: Some("What They Value"),
                content: "You value tenderness, imagination, and being met in the deep end. Cruelty anywhere in view wounds you personally. A partner who guards your softness without exploiting it is the whole treasure map.",
            },
        ],
        traits: &["devoted", "dreamy", "selfless", "boundless"],
        strengths: &["unconditional warmth", "romance with soul", "forgiveness past arithmetic"],
        challenges: &["loves the potential, marries the reality", "boundaries surrendered early", "martyrdom mistaken for devotion"],
    },
];
