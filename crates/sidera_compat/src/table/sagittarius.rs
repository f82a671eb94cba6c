//! Compatibility entries for a Sagittarius user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Aries,
        heading: "Full Throttle, No Map",
        description: "Aries is the one companion who never says 'maybe next year' — the bags are packed before you finish describing the mountain. Their fire is immediate where yours is far-sighted, a perfect relay pairing. Arguments flare and die like matches; neither of you can be bothered to archive them.",
        score: 9,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Taurus,
        heading: "The Arrow and the Oak",
        description: "Taurus offers a lovely life in one place, which is eleven fewer places than you had in mind. Their comfort is seductive and quietly immobilizing; your honesty about that stings more than you intend. Without a shared appetite for at least occasional upheaval, this one strains early.",
        score: 4,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Gemini,
        heading: "Opposite Compass Points",
        description: "Gemini is your opposite sign: they gather a thousand local facts while you hunt one distant truth, and the conversation between those two missions never runs dry. Both mutable, both allergic to cages, you grant each other room by reflex. Someone still has to remember where you both live.",
        score: 7,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Cancer,
        heading: "The Campfire and the Kitchen",
        description: "Cancer builds a home so warm it makes your wanderlust feel like ingratitude, which neither of you enjoys. Your candor bruises where it means to clarify; their moods mystify where they mean to invite. Love is possible, but the commute between your worlds is long.",
        score: 4,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Leo,
        heading: "The Expedition Royale",
        description: "Leo brings ceremony to your spontaneity — suddenly the road trip has a soundtrack and a dress code, and honestly it is better this way. Your frankness never threatens them and their drama never cages you. Fire understands fire; this one roars pleasantly for years.",
        score: 9,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Virgo,
        heading: "The Philosopher and the Fact-Checker",
        description: "Virgo annotates your grand theories with inconvenient footnotes, and they are usually right, which is worse. Their precision could give your visions real legs if you let it. Mutable both, you adapt around each other endlessly — the question is whether you are adapting toward anything.",
        score: 5,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Libra,
        heading: "First-Class Company",
        description: "Libra makes every journey civilized and every debate elegant, meeting your bluntness with amused grace instead of hurt. They polish your rough edges without sanding off the spirit. Air and fire at cruising altitude — few pairings travel this well, literally or otherwise.",
        score: 8,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Scorpio,
        heading: "Truth Versus Secrets",
        description: "You say everything you think; Scorpio thinks everything and says a fraction, on a need-to-know basis you apparently do not meet. Their possessiveness collides with your open borders policy. The chemistry is genuine and the philosophical gulf is wide — pack patience.",
        score: 5,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Sagittarius,
        heading: "Twin Arrows",
        description: "Another Sagittarius doubles the jokes, the flights, and the half-finished visa applications. Nobody guards the home fire, which bothers neither of you until it suddenly does. Aim your arrows at the same horizon at least most of the time and this is freedom squared.",
        score: 8,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Capricorn,
        heading: "The Optimist and the Auditor",
        description: "Capricorn hears your grand plan and asks about the pension implications, which deflates you more than any refusal could. Yet their structures are the only reason some of your visions ever landed. Respect grows slowly here, usually after the first joint success neither could have managed alone.",
        score: 5,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Aquarius,
        heading: "The Explorer and the Futurist",
        description: "Aquarius shares your distaste for fences and adds a blueprint for tearing them down systematically. Their ideals and your optimism make a genuinely hopeful pairing, rare and worth keeping. Neither crowds the other; both occasionally forget to come home, and neither minds.",
        score: 8,
    },
    CompatRow {
        user: Sign::Sagittarius,
        other: Sign::Pisces,
        heading: "Two Kinds of Elsewhere",
        description: "Pisces escapes inward while you escape outward — both mutable, both ruled by Jupiter in the old scheme, both chronically elsewhere. Their sensitivity asks you to aim your honesty carefully, a skill you are still acquiring. Shared wonder keeps this afloat; logistics remain unmanned.",
        score: 6,
    },
];
