//! Pluto placements: power, shadow, and transformation.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Pluto,
        title: "ARIES",
        subtitle: Some("Pluto in Aries"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Aries carries power in the will to begin. The deep current is self-assertion at existential stakes: identity forged, destroyed, and re-forged through confrontation. Survival here looks like daring.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from conquest to self-command. Early power expresses as dominance and first strikes; mastery arrives when the warrior learns which battles transform and which merely repeat.",
            },
        ],
        traits: &["will-forged", "confrontational", "regenerating", "primal"],
        strengths: &["rises from every defeat harder", "courage at soul depth", "initiates irreversible change"],
        challenges: &["force as first language", "battles sought for their heat", "rage at the root"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Pluto,
        title: "TAURUS",
        subtitle: Some("Pluto in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Taurus carries power in possession. The deep current runs through ownership, security, and the body itself — what is held, what holds back, what survives the flood. Your stability has tectonic plates.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from hoarding to stewardship. Power first expresses as accumulation against loss; mastery arrives when the grip opens and abundance, unclenched, regenerates on its own.",
            },
        ],
        traits: &["deep-rooted", "possession-tested", "enduring", "earthbound"],
        strengths: &["outlasts every upheaval", "rebuilds from bare ground", "wealth held with gravity"],
        challenges: &["loss as existential threat", "clings through the quake", "value fused to owning"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Pluto,
        title: "GEMINI",
        subtitle: Some("Pluto in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Gemini carries power in the word. The deep current runs through information — the secret learned, the narrative controlled, the question that unmakes a worldview. Your curiosity excavates.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from clever to true. Power first expresses as verbal advantage and strategic knowing; mastery arrives when language stops defending and starts transmuting — the word that heals what it once dissected.",
            },
        ],
        traits: &["mind-probing", "secret-gathering", "narrative-wielding", "restless-deep"],
        strengths: &["questions that transform", "understands by unearthing", "language with surgical power"],
        challenges: &["information as leverage", "depth scattered across channels", "the tongue's shadow side"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Pluto,
        title: "CANCER",
        subtitle: Some("Pluto in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Cancer carries power in the bloodline. The deep current runs through family, homeland, and emotional inheritance — loyalties that bind, wounds that pass down, the home defended at any cost.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from clinging to composting. Power first expresses as control of the nest and its members; mastery arrives when the ancestral pattern is named, grieved, and deliberately ended with you.",
            },
        ],
        traits: &["lineage-bound", "fiercely protective", "emotionally tectonic", "memory-deep"],
        strengths: &["transforms family fate", "protection at soul strength", "emotional truth excavated"],
        challenges: &["inherited grief runs the house", "protection becomes possession", "the past refuses burial"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Pluto,
        title: "LEO",
        subtitle: Some("Pluto in Leo"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Leo carries power in the self's radiance. The deep current runs through creative authority — the need to matter, to rule something, to leave a signature the erasers cannot reach.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from sovereignty to service. Power first expresses as charisma and command; mastery arrives when the crown is held on behalf of something larger than its wearer.",
            },
        ],
        traits: &["sovereign", "creative-compulsive", "legacy-driven", "radiant-shadowed"],
        strengths: &["creative force at depth", "leadership that regenerates", "unextinguishable core"],
        challenges: &["ego stakes on everything", "power adored, examined late", "the signature demands witnesses"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Pluto,
        title: "VIRGO",
        subtitle: Some("Pluto in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Virgo carries power in the fix. The deep current runs through work, health, and purification — systems rebuilt from the studs, bodies and routines treated as transformation sites.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from critique to regeneration. Power first expresses as relentless correction of self and world; mastery arrives when healing outranks perfecting and the scalpel learns when to rest.",
            },
        ],
        traits: &["purifying", "process-obsessive", "healing-driven", "exacting-deep"],
        strengths: &["rebuilds broken systems at the root", "devotion to genuine repair", "transformation via discipline"],
        challenges: &["perfection as purge", "the body keeps the audit", "criticism turned inward, compounding"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Pluto,
        title: "LIBRA",
        subtitle: Some("Pluto in Libra"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Libra carries power in the bond. The deep current runs through partnership — attraction as alchemy, justice as obsession, the other person as the site where the soul does its excavation.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from power-balancing to true meeting. Relationships first run as negotiations with hidden ledgers; mastery arrives when fairness stops keeping score and intimacy survives its own audits.",
            },
        ],
        traits: &["relationally intense", "justice-driven", "bond-transforming", "poised-over-depths"],
        strengths: &["transforms through partnership", "diplomacy with depth charge", "justice pursued to the root"],
        challenges: &["control wears courtesy", "the ledger under the love", "peace as power move"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Pluto,
        title: "SCORPIO",
        subtitle: Some("Pluto in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto rules Scorpio, and at home the current is undiluted: death, desire, debt, and rebirth engaged without anesthesia. This placement does not visit the underworld; it holds a lease there.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from surviving to alchemizing. Power first expresses as intensity, secrecy, and tests administered to everyone; mastery arrives when the phoenix cycle runs voluntarily — shedding chosen, not forced.",
            },
        ],
        traits: &["abyssal", "regenerative", "all-or-nothing", "unflinching"],
        strengths: &["transforms what others cannot face", "power native to the depths", "truth past the final veil"],
        challenges: &["intensity without intermission", "trust as fortress economy", "destruction courted for rebirth"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Pluto,
        title: "SAGITTARIUS",
        subtitle: Some("Pluto in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Sagittarius carries power in belief. The deep current runs through meaning itself — faiths embraced at conversion depth, truths pursued past borders, ideologies lived and detonated.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from crusade to wisdom. Power first expresses as evangelism and scorched-earth debate; mastery arrives when conviction survives its own deconstruction and returns humbler, portable, true.",
            },
        ],
        traits: &["conviction-powered", "truth-obsessive", "border-crossing", "zealous-deep"],
        strengths: &["belief with transforming force", "burns off false meaning", "vision at civilizational scale"],
        challenges: &["dogma in explorer's clothing", "truth as weapon", "faith cycles of boom and ash"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Pluto,
        title: "CAPRICORN",
        subtitle: Some("Pluto in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Capricorn carries power in the structure. The deep current runs through authority, institutions, and ambition — empires built, corrupted, razed, and rebuilt on better footings. Your shadow wears a title.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from climbing to refounding. Power first expresses as mastery of the existing ladder; transformation arrives when the ladder itself is judged — kept, repaired, or fed to the fire with full ceremony.",
            },
        ],
        traits: &["authority-deep", "empire-minded", "structurally ruthless", "time-patient"],
        strengths: &["rebuilds civilizations' plumbing", "power wielded with patience", "ambition that survives collapse"],
        challenges: &["control institutionalized", "legacy as compulsion", "the title becomes the self"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Pluto,
        title: "AQUARIUS",
        subtitle: Some("Pluto in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Aquarius carries power in the collective. The deep current runs through networks, revolutions, and the technologies that rewire what a society can be. Your shadow organizes.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from dissent to regeneration at scale. Power first expresses as the outsider's leverage and the group's pressure; mastery arrives when liberation includes the people who disagree with the liberators.",
            },
        ],
        traits: &["collective-powered", "system-transmuting", "radical-deep", "impersonal-intense"],
        strengths: &["transforms whole systems", "power shared as strategy", "future excavated early"],
        challenges: &["the cause swallows persons", "revolution's own shadow", "detachment at depth"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Pluto,
        title: "PISCES",
        subtitle: Some("Pluto in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("The Deep Current"),
                content: "Pluto in Pisces carries power in dissolution. The deep current runs through the collective unconscious itself — compassion at annihilating depth, imagination that remakes reality, surrender as the final power move.",
            },
            ContentSection {
                heading: Some("Transformation Arc"),
                content: "The arc moves from drowning to diving. Power first expresses as overwhelm — feeling everything, everywhere, at once; mastery arrives with gills: the capacity to enter the deep consciously and return carrying medicine.",
            },
        ],
        traits: &["oceanic-deep", "ego-dissolving", "mystic-powered", "permeable-to-the-depths"],
        strengths: &["transmutes collective pain", "imagination at creation depth", "surrender as strength"],
        challenges: &["boundaries against the flood", "martyrdom's undertow", "escape and transcendence confused"],
    },
];
