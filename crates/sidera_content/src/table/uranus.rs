//! Uranus placements: disruption, originality, and the generational current.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Uranus,
        title: "ARIES",
        subtitle: Some("Uranus in Aries"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Aries revolts by starting. The breakthrough instinct here is kinetic: smash the blocker, found the thing, ask the unaskable question in the first meeting. Your disruptions have a pulse rate.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort carries a pioneer charge — impatient with institutions, fluent in reinvention, convinced the future is a door you shoulder open. Its shadow is revolution as reflex, burning pastures merely because they were fenced.",
            },
        ],
        traits: &["insurgent", "kinetic", "first-moving", "combustive"],
        strengths: &["breaks deadlocks instantly", "fearless reinvention", "innovation with momentum"],
        challenges: &["disruption as habit", "rebellion outruns strategy", "novelty mistaken for progress"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Uranus,
        title: "TAURUS",
        subtitle: Some("Uranus in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Taurus revolts against the vault. The breakthrough instinct aims at money, land, and the meaning of security — you innovate slowly, then all at once, like a landslide. Your revolutions are the kind that re-deed property.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort rewires value itself: new currencies, new agricultures, new answers to 'what is enough.' Its shadow is upheaval in the one domain humans most need steady — the ground floor.",
            },
        ],
        traits: &["ground-shifting", "value-questioning", "slow-then-sudden", "material-minded"],
        strengths: &["reinvents what lasts", "innovation that holds value", "stubborn about the right futures"],
        challenges: &["resists its own medicine", "security upheaved repeatedly", "change arrives seismically"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Uranus,
        title: "GEMINI",
        subtitle: Some("Uranus in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Gemini revolts through the signal. The breakthrough instinct lives in language, networks, and the shortcut between two previously unacquainted ideas. You jailbreak conversations.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort rewires how information moves — new media, new tongues, new speeds of thought. Its shadow is signal without ballast: a thousand brilliant channels, consensus nowhere.",
            },
        ],
        traits: &["wired", "polyglot", "idea-splicing", "fast-twitch"],
        strengths: &["genius connections", "communication revolutions", "learns at disruption speed"],
        challenges: &["attention in shards", "novelty addiction", "truth outpaced by transmission"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Uranus,
        title: "CANCER",
        subtitle: Some("Uranus in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Cancer revolts at the kitchen table. The breakthrough instinct reimagines home, family, and belonging — chosen kin, moveable roots, sanctuaries with unusual floor plans. You renovate the ancestral house, sometimes with explosives.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort redefines family against its inherited blueprints. Its shadow is restlessness in the very place rest was supposed to live — home as a frequency never quite tuned.",
            },
        ],
        traits: &["root-reworking", "family-redefining", "emotionally inventive", "unsettled"],
        strengths: &["builds new kinds of belonging", "frees the family script", "intuition with voltage"],
        challenges: &["home never feels final", "breaks with the past sting", "security versus freedom, nightly"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Uranus,
        title: "LEO",
        subtitle: Some("Uranus in Leo"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Leo revolts on stage. The breakthrough instinct electrifies self-expression — art that shocks, leadership that breaks protocol, romance conducted like an avant-garde premiere. Your originality demands house lights.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort democratizes the spotlight: everyone a creator, every identity a performance worth staging. Its shadow is rebellion for the applause, the revolution sponsored by its own poster.",
            },
        ],
        traits: &["flamboyant", "self-inventing", "creative-radical", "attention-charged"],
        strengths: &["originality that performs", "courage to be spectacularly odd", "leads the parade it invented"],
        challenges: &["shock as signature", "ego rides the lightning", "needs witnesses to rebel"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Uranus,
        title: "VIRGO",
        subtitle: Some("Uranus in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Virgo revolts through the workflow. The breakthrough instinct dismantles broken systems of work, health, and habit, replacing them with the elegant fix nobody had budgeted for. You are the saboteur with a clipboard.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort revolutionizes the practical — medicine, methods, maintenance of bodies and planets. Its shadow is optimization as ideology: the perfected process, the exhausted human inside it.",
            },
        ],
        traits: &["system-hacking", "precise-radical", "health-reforming", "quietly disruptive"],
        strengths: &["fixes what institutions won't", "innovation that actually works", "revolution in the details"],
        challenges: &["critique without rest", "perfection electrified", "humane pace forgotten"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Uranus,
        title: "LIBRA",
        subtitle: Some("Uranus in Libra"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Libra revolts inside the contract. The breakthrough instinct rewrites partnership — marriages with amendments, justice with new plaintiffs, beauty with broken symmetries. You disturb the peace politely and permanently.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort renegotiates every relationship default it inherited. Its shadow is equilibrium nowhere: unions innovative, excellent, and chronically provisional.",
            },
        ],
        traits: &["relationally radical", "justice-rewiring", "aesthetic-disrupting", "diplomatically electric"],
        strengths: &["reinvents partnership fairly", "harmonizes the unprecedented", "beauty ahead of its era"],
        challenges: &["commitment with an exit clause", "peace perpetually renegotiated", "novelty strains the vow"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Uranus,
        title: "SCORPIO",
        subtitle: Some("Uranus in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Scorpio revolts in the basement. The breakthrough instinct detonates taboos — power, death, desire, debt — and walks through the wreckage taking notes. Your transformations skip the gradual setting entirely.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort drags the underworld into the grid: intimacy, shadow, and shared resources all get rewired. Its shadow is intensity addiction — the quiet year mistaken for a dead one.",
            },
        ],
        traits: &["taboo-breaking", "depth-charged", "regenerative", "absolute"],
        strengths: &["fearless in the depths", "transformation at voltage", "sees through every façade"],
        challenges: &["upheaval as lifestyle", "control wrestles freedom", "burns bridges with precision"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Uranus,
        title: "SAGITTARIUS",
        subtitle: Some("Uranus in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Sagittarius revolts against the map. The breakthrough instinct targets dogma, borders, and curricula; your heresies come with passport stamps. You believe in almost nothing you were handed and almost everything you found.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort globalizes rebellion — faiths remixed, educations unbundled, frontiers treated as suggestions. Its shadow is rootless conviction: a philosophy per timezone.",
            },
        ],
        traits: &["heretical", "border-ignoring", "visionary", "centrifugal"],
        strengths: &["liberates stale beliefs", "future-sighted optimism", "truth hunted across borders"],
        challenges: &["doctrine of the month", "freedom without address", "wisdom outpaced by wandering"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Uranus,
        title: "CAPRICORN",
        subtitle: Some("Uranus in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Capricorn revolts from inside the boardroom. The breakthrough instinct restructures institutions that outlived their load ratings — you do not storm the palace, you refinance it. Your revolutions pass inspection.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort rebuilds authority itself: governments, corporations, and careers all get new architecture. Its shadow is demolition deferred — knowing the structure is condemned and still paying its mortgage.",
            },
        ],
        traits: &["structurally radical", "patiently disruptive", "authority-rewiring", "engineered"],
        strengths: &["reforms that actually hold", "revolution with blueprints", "topples only what it can replace"],
        challenges: &["caution slows the break", "rebel and establishment, same body", "change by committee"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Uranus,
        title: "AQUARIUS",
        subtitle: Some("Uranus in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus rules Aquarius, and at home the lightning organizes. The breakthrough instinct is systemic: networks, collectives, technologies of liberation. You rebel by designing the alternative and open-sourcing it.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort is the future's native population — communal, electric, allergic to gatekeepers. Its shadow is utopia without users: systems perfected for a humanity that keeps failing to show up as specified.",
            },
        ],
        traits: &["native-futurist", "collective-wiring", "original", "electric"],
        strengths: &["invents the commons", "genius for networks", "freedom engineered for everyone"],
        challenges: &["humans disappoint the diagram", "detachment at scale", "perpetual beta"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Uranus,
        title: "PISCES",
        subtitle: Some("Uranus in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("The Rebel Streak"),
                content: "Uranus in Pisces revolts in the dream. The breakthrough instinct dissolves the walls around imagination, faith, and compassion — sudden awakenings, art from nowhere, mysticism with a modem. Your rebellions are felt before they are seen.",
            },
            ContentSection {
                heading: Some("Generational Current"),
                content: "This cohort electrifies the collective unconscious: spirituality unbundled from its buildings, empathy at network scale. Its shadow is the beautiful signal without a receiver — visions that never find a vessel.",
            },
        ],
        traits: &["visionary", "boundary-dissolving", "mystic-modern", "oceanic"],
        strengths: &["awakens quietly and permanently", "imagination as disruption", "compassion goes viral"],
        challenges: &["visions outrun vessels", "escapism electrified", "sensitivity to every storm"],
    },
];
