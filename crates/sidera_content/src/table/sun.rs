//! Sun placements: core identity and vitality.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Sun,
        title: "ARIES",
        subtitle: Some("Sun in Aries"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Aries Sun runs on ignition. You are built to begin — projects, arguments, movements, mornings — and your sense of self is strongest in the instant between decision and action. Waiting is the only weather you cannot survive.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "People experience you as direct to the point of bracing. You compete when nobody declared a contest, recover from defeat before others finish celebrating, and would rather apologize for a real mistake than ask permission for a possible one.",
            },
        ],
        traits: &["pioneering", "impulsive", "courageous", "self-starting"],
        strengths: &["acts while others deliberate", "honest without agenda", "recovers fast"],
        challenges: &["impatience", "starts more than it finishes", "blunt delivery"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Sun,
        title: "TAURUS",
        subtitle: Some("Sun in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Taurus Sun is the zodiac's gravity. Identity forms around what endures — land, craft, loyalty, the slow compounding of effort into security. You do not chase; you cultivate, and you measure yourself by what still stands after the storms.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You move deliberately and commit rarely but completely. Comfort is not laziness to you — it is the proof the system works. Once your mind is set, persuasion becomes a geological process.",
            },
        ],
        traits: &["steadfast", "sensual", "patient", "possessive"],
        strengths: &["unshakable follow-through", "calm under pressure", "builds things that last"],
        challenges: &["stubbornness", "resistance to change", "comfort can become inertia"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Sun,
        title: "GEMINI",
        subtitle: Some("Sun in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Gemini Sun is a standing question. Identity lives in the exchange — collecting, connecting, and redistributing information — and you are never more yourself than mid-conversation with three tabs open. Sameness is the one story you refuse to read twice.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You think out loud, change positions as evidence changes, and treat curiosity as a moral duty. Others may call it scattered; you call it coverage. Your wit arrives faster than your filter.",
            },
        ],
        traits: &["curious", "adaptable", "verbal", "restless"],
        strengths: &["learns anything quickly", "connects unlikely people and ideas", "endlessly adaptable"],
        challenges: &["scattered focus", "boredom arrives early", "skims where depth is owed"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Sun,
        title: "CANCER",
        subtitle: Some("Sun in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Cancer Sun orbits the idea of home. Identity is relational — you know who you are by who you protect, feed, and remember. Your memory is an archive of feelings, filed by anniversary.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You approach the world sideways, testing safety before committing, and retreat into the shell when the weather turns. Those allowed inside discover the fiercest loyalty in the zodiac, expressed mostly through casseroles and remembered details.",
            },
        ],
        traits: &["nurturing", "protective", "intuitive", "moody"],
        strengths: &["creates belonging wherever it lands", "reads emotional weather precisely", "loyal past reason"],
        challenges: &["indirect about needs", "holds hurts long past their expiry", "retreats instead of negotiating"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Sun,
        title: "LEO",
        subtitle: Some("Sun in Leo"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Leo Sun is the Sun at home — identity as radiance. You are built to be witnessed: creating, performing, presiding, encouraging. Your self-respect is a public utility; when it shines, whole rooms warm up.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You lead with warmth and expect the loyalty you so readily give. Praise is oxygen, and its absence reads as a power outage. At your best the generosity is real and the drama is merely excellent production value.",
            },
        ],
        traits: &["radiant", "proud", "generous", "dramatic"],
        strengths: &["lifts everyone in the room", "loyal and openhanded", "unafraid of the spotlight"],
        challenges: &["needs applause to refuel", "pride bruises easily", "mistakes attention for love"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Sun,
        title: "VIRGO",
        subtitle: Some("Sun in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Virgo Sun finds itself in refinement. Identity is earned through usefulness — the fixed flaw, the improved system, the quiet competence nobody else noticed was holding the day together. Perfection is not the goal; it is the direction.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You see the gap between how things are and how they should be, everywhere, always. It makes you an invaluable colleague and a demanding inner critic. Service is your love language, analysis your resting state.",
            },
        ],
        traits: &["precise", "analytical", "modest", "service-minded"],
        strengths: &["notices what everyone misses", "improves whatever it touches", "reliable in the details"],
        challenges: &["the inner critic works overtime", "worry masquerades as diligence", "help can shade into control"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Sun,
        title: "LIBRA",
        subtitle: Some("Sun in Libra"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Libra Sun composes itself in relation. Identity emerges between people — in fairness brokered, beauty arranged, and rooms kept in harmony. You are the zodiac's editor of atmospheres.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You weigh everything, a habit decisive people mistake for weakness until your verdict turns out to be the one that held. Conflict costs you physically; charm is both gift and armor. You are rarely alone by choice or for long.",
            },
        ],
        traits: &["diplomatic", "aesthetic", "partnership-minded", "indecisive"],
        strengths: &["sees every side honestly", "disarms conflict with grace", "impeccable taste"],
        challenges: &["decisions by committee of one, endlessly", "peace kept at truth's expense", "outsources identity to partners"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Sun,
        title: "SCORPIO",
        subtitle: Some("Sun in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Scorpio Sun burns underwater. Identity is forged in intensity — what you survive, what you keep secret, what you are willing to lose everything for. You distrust surfaces on principle, including your own.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You read rooms like case files and reveal yourself on a strictly need-to-know basis. Loyalty, once given, is total; betrayal is filed permanently. You transform rather than adjust — all or nothing is the only denomination you carry.",
            },
        ],
        traits: &["intense", "private", "strategic", "magnetic"],
        strengths: &["unflinching in crisis", "keeps every confidence", "sees beneath every surface"],
        challenges: &["suspicion as default setting", "control dressed as care", "forgiveness arrives geologically"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Sun,
        title: "SAGITTARIUS",
        subtitle: Some("Sun in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Sagittarius Sun is aimed at the horizon. Identity is a journey narrative — the next country, the next philosophy, the next bigger truth. You would rather be lost somewhere new than found somewhere familiar.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "Your optimism is structural, not naive; you have simply seen enough to know most things work out or make good stories. Honesty exits you unedited. Commitment frightens you only when it resembles a fence.",
            },
        ],
        traits: &["adventurous", "philosophical", "candid", "freedom-loving"],
        strengths: &["contagious optimism", "truth-telling without malice", "at home anywhere"],
        challenges: &["overpromises the horizon", "tactless candor", "allergic to routine"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Sun,
        title: "CAPRICORN",
        subtitle: Some("Sun in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Capricorn Sun identifies with the climb. Selfhood is structural — responsibilities carried, institutions mastered, reputations built brick by deliberate brick. You were born with an old soul's patience and a CFO's eye.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You understate everything, deliver more than promised, and treat ambition as a private religion. Feelings exist; they are simply not scheduled during working hours. Success softens you — slowly, like everything else you permit.",
            },
        ],
        traits: &["ambitious", "disciplined", "reserved", "pragmatic"],
        strengths: &["outworks everyone quietly", "unbreakable word", "long-game mastery"],
        challenges: &["work swallows the rest", "austerity toward self and others", "asks for help never"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Sun,
        title: "AQUARIUS",
        subtitle: Some("Sun in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Aquarius Sun identifies from orbit. You know yourself by your distance from the consensus — the reformer's eye, the scientist's doubt, the stubborn certainty that normal is just a setting someone else chose. Belonging interests you; conforming does not.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You are warmest toward humanity at scale and coolest in close quarters, where expectations feel like surveillance. Ideas are your intimacy. Once a principle is involved, you are the most immovable air sign ever manufactured.",
            },
        ],
        traits: &["original", "principled", "detached", "future-facing"],
        strengths: &["sees the system, not just the symptom", "loyal to ideals under pressure", "genuinely original mind"],
        challenges: &["emotional distance", "contrarian reflex", "principles can outrank people"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Sun,
        title: "PISCES",
        subtitle: Some("Sun in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("Core Identity"),
                content: "The Pisces Sun has porous borders. Identity is tidal — you absorb the moods, dreams, and sorrows around you and return them as art, empathy, or disappearance. You are the zodiac's proof that sensitivity is a form of intelligence.",
            },
            ContentSection {
                heading: Some("How It Shows Up"),
                content: "You navigate by feeling where others use maps, and your compassion extends to people who have done nothing to deserve it. Escape — into fantasy, music, sleep, or elsewhere — is your pressure valve. Boundaries are a foreign language you must study deliberately.",
            },
        ],
        traits: &["empathic", "imaginative", "fluid", "elusive"],
        strengths: &["boundless compassion", "artistic imagination", "reads the unspoken instantly"],
        challenges: &["boundaries dissolve", "escapism under pressure", "absorbs others' pain as its own"],
    },
];
