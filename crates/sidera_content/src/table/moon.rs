//! Moon placements: emotional nature and instinct.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Moon,
        title: "ARIES",
        subtitle: Some("Moon in Aries"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "Feelings arrive in the Aries Moon like flash floods: sudden, total, and gone by evening. Anger is your most honest emotion and also your fastest, burning clean without residue. You need your feelings acted on, not analyzed.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is wherever something is happening. You are soothed by motion, competition, and partners who fight fair and fast, then drop it. Nothing corrodes you like being told to calm down.",
            },
        ],
        traits: &["quick-tempered", "passionate", "restless", "direct"],
        strengths: &["emotionally honest in real time", "no grudges", "courage under feeling"],
        challenges: &["fuse runs short", "needs instant resolution", "mistakes stillness for stagnation"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Moon,
        title: "TAURUS",
        subtitle: Some("Moon in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Taurus Moon is exalted for a reason: feeling here is slow, stable, and body-deep. You metabolize emotion through the senses — food, touch, music, routine — and your calm is genuinely load-bearing for everyone around you.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is a physical fact: the same mug, the same chair, the same person. Change, even good change, costs you more than people realize. Security is not a preference; it is your emotional oxygen.",
            },
        ],
        traits: &["steady", "sensual", "comfort-seeking", "slow to anger"],
        strengths: &["unflappable presence", "loyal through storms", "soothes others by existing"],
        challenges: &["digs in when pushed", "equates change with threat", "comfort eats ambition"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Moon,
        title: "GEMINI",
        subtitle: Some("Moon in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Gemini Moon feels in language. An emotion is not real until you have described it, preferably to someone, possibly twice in different drafts. Talking is how you digest; silence is how you starve.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is a good conversation that never quite ends. You are soothed by novelty, banter, and a full calendar, unsettled by heavy atmospheres nobody will name. Your moods change with the information.",
            },
        ],
        traits: &["verbal", "changeable", "curious", "light-footed"],
        strengths: &["articulates feelings others can't", "lightens heavy rooms", "adapts to any mood"],
        challenges: &["narrates feelings instead of feeling them", "restless heart", "distracts itself from depth"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Moon,
        title: "CANCER",
        subtitle: Some("Moon in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Moon rules Cancer, and here feeling runs at full native strength: tidal, deep, and exactly as changeable as the literal Moon. You remember every kindness and every slight, with timestamps. Caring for others is how you metabolize your own weather.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is the project of your life — the kitchen, the people in it, the rituals that say you belong here. You need retreat the way others need exercise. Those who rush your shell learn nothing; those who wait learn everything.",
            },
        ],
        traits: &["deep-feeling", "protective", "nostalgic", "tenacious"],
        strengths: &["nurtures instinctively", "emotional memory of an archivist", "fierce in defense of its own"],
        challenges: &["moods arrive unannounced", "hints instead of asks", "the shell closes too fast"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Moon,
        title: "LEO",
        subtitle: Some("Moon in Leo"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Leo Moon feels in ceremony. Emotions here are large, warm, and slightly staged — not false, just formatted for an audience. You need your love witnessed and your efforts applauded, and in exchange you give devotion with both hands.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is wherever you are adored without irony. Celebration is an emotional need, not a luxury; being taken for granted is the one wound that does not heal on schedule. Your loyalty, once pledged, is theatrical and total.",
            },
        ],
        traits: &["warm", "proud", "expressive", "loyal"],
        strengths: &["generous heart", "makes others feel chosen", "courage in emotional honesty"],
        challenges: &["needs an audience to feel real", "sulks royally", "pride blocks the apology"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Moon,
        title: "VIRGO",
        subtitle: Some("Moon in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Virgo Moon feels through usefulness. Anxiety is the default idle state, discharged by fixing, sorting, and improving — yours, and everyone else's if permitted. Love, to you, looks like remembering the allergy and arriving on time.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is a system that works: clean surfaces, paid bills, a partner who notices effort. Chaos in the environment becomes chaos in your chest. You are soothed by small completed tasks the way others are soothed by wine.",
            },
        ],
        traits: &["attentive", "anxious", "helpful", "understated"],
        strengths: &["practical devotion", "keeps everyone's life running", "emotionally observant"],
        challenges: &["worry without an off switch", "criticizes what it loves", "discounts its own needs"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Moon,
        title: "LIBRA",
        subtitle: Some("Moon in Libra"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Libra Moon feels in duets. Your emotional equilibrium is calibrated against the nearest relationship; discord anywhere in range registers as discord in you. Fairness is not an ideal here — it is a digestive requirement.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is beautiful, calm, and shared. You soothe yourself by smoothing others, which works until your own unvoiced needs file a formal complaint. Learning to have the difficult conversation is your life's elegant homework.",
            },
        ],
        traits: &["harmonizing", "relational", "tactful", "conflict-averse"],
        strengths: &["instinctive mediator", "creates calm atmospheres", "considers everyone"],
        challenges: &["keeps the peace, loses the point", "needs company to settle", "own needs go unfiled"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Moon,
        title: "SCORPIO",
        subtitle: Some("Moon in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Scorpio Moon feels everything and shows almost nothing. Emotions here are deep-sea currents: invisible at the surface, capable of moving ships. Trust is your only currency, and you count it obsessively.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is one person who has seen the worst of you and stayed. You bond through intensity and honesty delivered in private; small talk is emotional static. When hurt, you go quiet and archive; when safe, you are bottomless.",
            },
        ],
        traits: &["intense", "guarded", "perceptive", "unforgetting"],
        strengths: &["loyalty without conditions", "emotional depth charge", "unshockable confidant"],
        challenges: &["tests people covertly", "jealousy runs silent", "release does not come naturally"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Moon,
        title: "SAGITTARIUS",
        subtitle: Some("Moon in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Sagittarius Moon metabolizes feeling into meaning. Every heartbreak becomes a lesson, every low a future anecdote; your emotional first aid kit is a plane ticket and a philosophy. Mood repairs itself in open air.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is a base camp, not a destination. You need partners who wave you off cheerfully and laugh at the stories you bring back. Heaviness without humor, or need without exit signs, sends you quietly toward the door.",
            },
        ],
        traits: &["buoyant", "independent", "candid", "roaming"],
        strengths: &["finds the lesson fast", "mood floats back up", "emotionally generous travel companion"],
        challenges: &["outruns grief instead of feeling it", "honesty lands heavy", "commitment smells like fencing"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Moon,
        title: "CAPRICORN",
        subtitle: Some("Moon in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Capricorn Moon manages feeling like a portfolio: conservatively, privately, with quarterly reviews. You learned early that needs were expensive, so you budgeted yours down. Composure is your native tongue; tenderness, a carefully guarded dialect.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is order, solvency, and people who keep their word. You show love by handling things — logistics, emergencies, futures. Letting someone handle you, even once, is the summit behind the summit.",
            },
        ],
        traits: &["composed", "dutiful", "self-contained", "dry-humored"],
        strengths: &["steady in any crisis", "love expressed as reliability", "carries weight without complaint"],
        challenges: &["needs go unreported", "mistakes stoicism for strength", "warmth on a delay"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Moon,
        title: "AQUARIUS",
        subtitle: Some("Moon in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Aquarius Moon feels at one remove, observing its own emotions like interesting specimens. This is not coldness; it is processing architecture. You genuinely care — at scale, on principle, and preferably with some personal airspace.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is a friendship that turned permanent. You need intellectual companionship, unscheduled solitude, and zero emotional ambushes. Predictable affection suits you better than passionate turbulence, whatever the movies say.",
            },
        ],
        traits: &["detached", "idealistic", "independent", "even-keeled"],
        strengths: &["calm in emotional weather", "accepts people as they are", "friendship-grade loyalty"],
        challenges: &["intimacy feels like crowding", "analyzes feelings instead of having them", "distance wounds the close ones"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Moon,
        title: "PISCES",
        subtitle: Some("Moon in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("Emotional Nature"),
                content: "The Pisces Moon has no emotional waterproofing: every feeling in the room comes aboard, labeled or not. You dream vividly, cry easily, and forgive prematurely. Your empathy is a tide that does not check whose shore it floods.",
            },
            ContentSection {
                heading: Some("What Feels Like Home"),
                content: "Home is wherever you can stop filtering — soft light, music, someone who does not require explanations. You recharge in solitude and imagination. Without regular retreat, other people's weather becomes your permanent climate.",
            },
        ],
        traits: &["porous", "dreamy", "compassionate", "impressionable"],
        strengths: &["infinite empathy", "intuits the unsaid", "forgives what others can't"],
        challenges: &["absorbs ambient pain", "boundaries dissolve on contact", "escapes rather than confronts"],
    },
];
