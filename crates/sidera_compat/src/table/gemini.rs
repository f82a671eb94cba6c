//! Compatibility entries for a Gemini user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Aries,
        heading: "Ideas Meet Ignition",
        description: "You pitch, Aries leaps, and suddenly the hypothetical road trip is happening tonight. Their decisiveness is the missing piece your branching mind has been looking for, and they never once call your curiosity flaky. Keep the honesty quick and the apologies quicker; neither of you holds a grudge for long.",
        score: 8,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Taurus,
        heading: "Quicksilver and Clay",
        description: "Taurus wants the same restaurant every Friday and you want a different city every month, which makes even small plans a summit negotiation. Their steadiness can be a gift when your thoughts spin too fast to land. The cost is pace: this only works if you genuinely enjoy slowing down sometimes.",
        score: 4,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Gemini,
        heading: "A Conversation With Four Voices",
        description: "Two Geminis generate enough wit, trivia, and spontaneous plans to power a small city, and the talking genuinely never stops. The hazard is that nobody in this pairing defaults to depth or follow-through — feelings can get narrated instead of felt. Anchor each other occasionally and this is endless fun.",
        score: 7,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Cancer,
        heading: "Wordplay and Undertow",
        description: "Cancer feels the conversation you are merely having, and your breeziness can bruise them without your noticing. Their intuition catches truths your logic talks past, which is humbling if you let it be. Slow your tempo near their tender spots and they will forgive your restlessness almost indefinitely.",
        score: 5,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Leo,
        heading: "The Storyteller and the Star",
        description: "Leo gives you a magnificent subject and you give Leo the clever chronicle they deserve — this pairing flirts, performs, and charms entire rooms together. Their loyalty steadies your scattered attention more than you expected. Just never let the teasing cut the royal pride; Leo laughs at everything except that.",
        score: 8,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Virgo,
        heading: "Mercury's Two Workshops",
        description: "You share a ruling planet with Virgo, but you use it to explore and they use it to audit. Your tangents drive them quietly mad; their corrections do the same to you, less quietly. When you aim the banter at a shared problem instead of each other, the combined mind is formidable.",
        score: 6,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Libra,
        heading: "Air Over Open Water",
        description: "Libra matches your repartee and raises you charm, and neither of you ever runs out of things to discuss over a long dinner. They bring aesthetic judgment to your chaos of interests; you bring motion to their deliberation. Among air pairings this one simply glides.",
        score: 9,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Scorpio,
        heading: "The Open Book and the Locked Vault",
        description: "Scorpio wants your whole truth and you would honestly rather keep three versions in rotation. Their intensity fascinates you the way deep water fascinates a bird; you can circle it but not breathe in it for long. Mutual obsession is possible, mutual ease is rare.",
        score: 5,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Sagittarius,
        heading: "Opposite Ends of the Same Question",
        description: "Sagittarius is your opposite sign: you collect facts, they chase meaning, and each of you carries the half the other forgot. Travel, debate, and grand theories keep this pairing permanently in motion. The friction point is commitment to any one plan — someone eventually has to book the tickets.",
        score: 7,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Capricorn,
        heading: "The Juggler and the Architect",
        description: "Capricorn builds decade-long structures and watches you change hobbies quarterly with visible concern. Their gravity can feel like a curfew, yet their follow-through turns the best of your ideas into things that actually exist. Respect is possible; rhythm is the hard part.",
        score: 4,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Aquarius,
        heading: "Signal Found",
        description: "Aquarius thinks in systems and you think in threads, and together the conversation goes places neither map alone could reach. They grant you total freedom without a flicker of jealousy, which you repay with genuine fascination. One of the easiest meetings of minds in the zodiac.",
        score: 9,
    },
    CompatRow {
        user: Sign::Gemini,
        other: Sign::Pisces,
        heading: "Static on the Dream Frequency",
        description: "You and Pisces are both mutable and both everywhere at once, but your everywhere is ideas and theirs is feelings. You can talk circles around them while entirely missing what they meant. When you trade precision for presence, their imagination gives your wit somewhere soft to land.",
        score: 5,
    },
];
