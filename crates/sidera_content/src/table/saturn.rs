//! Saturn placements: discipline, limits, and the long lesson.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Saturn,
        title: "ARIES",
        subtitle: Some("Saturn in Aries"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Aries puts a governor on the throttle. The lesson is initiative under discipline: early life keeps stalling your starts until you learn that courage is a practice, not a mood. Anger must be forged into direction.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery arrives when you can begin things calmly and finish them anyway. The fear underneath is of being slow, weak, or second; the work is discovering that patience was the most aggressive move available.",
            },
        ],
        traits: &["tested-in-action", "self-governing", "frustrated-early", "forged"],
        strengths: &["courage with a structure", "leads without recklessness", "discipline hard-won and real"],
        challenges: &["stalled starts breed doubt", "anger at delay", "independence learned the hard way"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Saturn,
        title: "TAURUS",
        subtitle: Some("Saturn in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Taurus teaches security from the inside out. Early scarcity — of money, comfort, or certainty — installs a lifelong audit of what 'enough' means. The lesson is that safety is built, not bought, and then that it was never the point.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is a quiet relationship with material life: owning without clutching, saving without starving the present. When the fear of losing it all retires, your patience becomes genuine wealth.",
            },
        ],
        traits: &["security-tested", "frugal", "enduring", "value-building"],
        strengths: &["unshakeable financial discipline", "builds slowly and permanently", "calm earned against scarcity"],
        challenges: &["scarcity scripts persist", "clutches the known", "worth measured in holdings"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Saturn,
        title: "GEMINI",
        subtitle: Some("Saturn in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Gemini disciplines the voice. Early doubts about being heard, smart enough, or taken seriously make speech feel like an exam. The lesson is that your words gain weight exactly as you learn to stand behind fewer of them.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery looks like earned authority in communication — the writer, teacher, or explainer people trust because you do the homework twice. The curious mind, once structured, becomes an institution.",
            },
        ],
        traits: &["deliberate-of-speech", "studious", "doubt-tested", "precise"],
        strengths: &["words with load ratings", "learns deeply what it learns", "communication as craft"],
        challenges: &["speech anxiety lingers", "overthinks the sentence", "curiosity rationed by fear"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Saturn,
        title: "CANCER",
        subtitle: Some("Saturn in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Cancer builds walls around the softest room. Early emotional weather — homes that weren't safe harbors, care that came with conditions — teaches you to ration tenderness. The lesson is that the fortress was supposed to have a door.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is becoming the steady home you did not have: for others first, eventually for yourself. When duty to family transforms from debt into choice, the walls become load-bearing warmth.",
            },
        ],
        traits: &["guarded", "dutiful", "deep-rooted", "slow-to-trust"],
        strengths: &["reliability in the storm", "builds real sanctuaries", "emotional strength with foundations"],
        challenges: &["feelings behind glass", "care entangled with duty", "needs met last, if ever"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Saturn,
        title: "LEO",
        subtitle: Some("Saturn in Leo"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Leo dims the stage lights on purpose. Early experiences of being unseen, upstaged, or applauded only for performance teach you to distrust your own shine. The lesson is that radiance is a responsibility, not a request.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery arrives when you create without waiting for permission or applause — authority in art, leadership, or love that warms whether or not anyone claps. The earned crown sits easier than the demanded one.",
            },
        ],
        traits: &["earnest", "recognition-tested", "quietly proud", "creative-under-discipline"],
        strengths: &["leadership without vanity", "creative work with spine", "warmth that survived winter"],
        challenges: &["doubts its own light", "performs for permission", "praise both craved and distrusted"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Saturn,
        title: "VIRGO",
        subtitle: Some("Saturn in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Virgo doubles the inspector's shift. The standards were already high; Saturn makes them a law with penalties. The lesson is the difference between excellence and flagellation, learned slowly, usually via burnout.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is craft held to humane tolerances: work that is genuinely excellent and demonstrably finished. When 'good enough' stops being heresy, you become the master craftsman instead of the eternal apprentice.",
            },
        ],
        traits: &["exacting", "dutiful", "health-conscious", "perfection-tested"],
        strengths: &["craft with a conscience", "reliability beyond question", "systems that actually serve"],
        challenges: &["the inner auditor never sleeps", "worry somatizes", "perfection postpones living"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Saturn,
        title: "LIBRA",
        subtitle: Some("Saturn in Libra"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn is exalted in Libra: the judge's seat suits it. The lesson is commitment — learning that fairness is a discipline, relationships are contracts honored daily, and love matures under terms. Early bonds may feel like case law: instructive, costly.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is the capacity for devoted, durable partnership and impartial judgment under pressure. You become the one called to arbitrate precisely because your fairness was stress-tested first at home.",
            },
        ],
        traits: &["judicious", "committed", "fairness-forged", "measured"],
        strengths: &["justice as earned instinct", "partnerships built like institutions", "balance under load"],
        challenges: &["love entangled with duty", "delays the verdict on itself", "alone in the judge's chambers"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Saturn,
        title: "SCORPIO",
        subtitle: Some("Saturn in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Scorpio audits the underworld. Control, trust, and shared resources are the examination subjects; early betrayals or entanglements teach you to armor the deep self. The lesson is that control is rented, never owned.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is power held lightly: intimacy without surveillance, strength without the need to test it. When you finally release the grip, what remains is the most durable will in the zodiac, now pointed somewhere useful.",
            },
        ],
        traits: &["fortified", "penetrating", "control-tested", "transformative"],
        strengths: &["endures what breaks others", "discipline of the depths", "trust, once built, is bedrock"],
        challenges: &["control as security blanket", "intimacy audited", "release resisted to the last"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Saturn,
        title: "SAGITTARIUS",
        subtitle: Some("Saturn in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Sagittarius fact-checks the faith. Early collisions between belief and evidence — failed gurus, punctured certainties — teach you that meaning must be built, not borrowed. The lesson is optimism with a foundation inspection.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is a philosophy that survives audits: beliefs you tested personally, freedom you structured rather than fled into. You become the rare teacher whose hope has paperwork.",
            },
        ],
        traits: &["truth-tested", "principled", "serious-seeking", "earned-faith"],
        strengths: &["wisdom with citations", "freedom responsibly engineered", "conviction that survived doubt"],
        challenges: &["cynicism after the fall", "dogma as scar tissue", "joy rationed by rigor"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Saturn,
        title: "CAPRICORN",
        subtitle: Some("Saturn in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn rules Capricorn, and at home it teaches at full intensity: responsibility early, authority late, nothing free. The lesson is distinguishing the mountain you must climb from the one you were handed. Both are steep; only one is yours.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is legitimate authority — the elder whose power was assembled from kept promises. When achievement stops being a debt payment to the past, the summit finally has a view.",
            },
        ],
        traits: &["burdened-early", "authoritative", "enduring", "structural"],
        strengths: &["carries what others cannot", "authority beyond question", "time as an ally"],
        challenges: &["duty without end date", "worth equals output", "the summit keeps receding"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Saturn,
        title: "AQUARIUS",
        subtitle: Some("Saturn in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Aquarius — the traditional ruler in its airy seat — teaches structured rebellion. The lesson is belonging: early exile or outsider status hardens into principle, and principle must then learn to build rather than merely critique.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is the architect of systems that serve people who will never know your name. You become the reformer with blueprints, not just objections — cold-forged idealism that actually ships.",
            },
        ],
        traits: &["systematic", "outsider-forged", "principled", "reforming"],
        strengths: &["builds the better structure", "loyal to tested ideals", "discipline in service of the many"],
        challenges: &["belongs everywhere, trusted nowhere", "ideals calcify", "distance as default defense"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Saturn,
        title: "PISCES",
        subtitle: Some("Saturn in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("The Lesson"),
                content: "Saturn in Pisces builds levees in the flood plain. The lesson is boundaries for the boundless: compassion with limits, imagination with deadlines, faith with both feet findable. Early life may blur duty and sacrifice until they seem synonymous.",
            },
            ContentSection {
                heading: Some("Building Mastery"),
                content: "Mastery is disciplined tenderness — the artist who ships, the healer who keeps office hours. When you learn that saying no preserves the ocean rather than draining it, the dream finally gets infrastructure.",
            },
        ],
        traits: &["compassion-tested", "quietly dutiful", "dream-structuring", "permeable"],
        strengths: &["gives form to the formless", "service with sustainable limits", "faith that survived the fog"],
        challenges: &["martyrdom as muscle memory", "guilt polices the boundary", "structure feels like betrayal"],
    },
];
