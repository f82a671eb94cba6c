//! Compatibility entries for a Libra user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Libra,
        other: Sign::Aries,
        heading: "The Diplomat and the Duelist",
        description: "Aries is your opposite sign and the bluntest mirror you own: they decide in seconds what you deliberate for weeks, and somehow the partnership balances. You teach them that winning the room beats winning the argument; they teach you that a made decision beats a perfect one. Electric, instructive, occasionally exhausting.",
        score: 7,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Taurus,
        heading: "Shared Venus, Different Tempos",
        description: "Taurus shares your ruling planet and your love of beautiful things, but they buy once and keep forever while you are still comparing options. Their certainty is restful when your scales will not settle. Luxurious and affectionate, provided nobody audits the time you spend choosing.",
        score: 7,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Gemini,
        heading: "The Salon Pairing",
        description: "Gemini keeps the conversation spinning and you keep it civilized, and together you host the dinner everyone wants a seat at. Ideas flow without friction and social life arranges itself. Neither of you loves the heavy emotional lifting, so agree early on who fetches the feelings when they are needed.",
        score: 9,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Cancer,
        heading: "Balance on a Moving Tide",
        description: "Cancer feels in waves while you weigh in measures, and your careful neutrality can read to them as absence. They want you home; you want the world invited in. Both of you are cardinal initiators, though, and a shared project — a house, a cause, a family — gives the seesaw its fulcrum.",
        score: 5,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Leo,
        heading: "The Gallery and the Masterpiece",
        description: "Leo provides the radiance and you provide the setting that makes it sing — a natural alliance of charm and grandeur. They decide, you refine, and the whole arrangement photographs beautifully. Flattery costs you nothing and buys you everything with this one.",
        score: 8,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Virgo,
        heading: "The Aesthete and the Perfectionist",
        description: "Virgo spots flaws you would rather charm into invisibility, and their candor tests your talent for harmony. Still, their competence is its own elegance, and they make the beautiful life you envision actually function. Let them critique the plan, not the partnership.",
        score: 6,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Libra,
        heading: "Mirrors in Golden Frames",
        description: "Two Libras create the most gracious household on the block and take four months to choose the sofa. The mutual consideration is genuine; so is the mutual avoidance of every uncomfortable conversation. Someone must occasionally tip the scales on purpose, or nothing real gets decided.",
        score: 7,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Scorpio,
        heading: "Charm Meets the Undertow",
        description: "Scorpio wants depth without witnesses and you want harmony with an audience, so intimacy becomes a negotiation of venues. Their intensity fascinates and slightly frightens you — correctly, on both counts. They will trade their secrets only for your full sincerity, no diplomatic edition.",
        score: 6,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Sagittarius,
        heading: "The Invitation and the Voyage",
        description: "Sagittarius supplies the adventure and you supply the company worth having on it. Their honesty occasionally knocks over your careful table settings, but the laughter afterward is real. Air feeds fire: you fan their optimism and they burn off your overthinking.",
        score: 8,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Capricorn,
        heading: "The Partnership Ledger",
        description: "Capricorn approaches romance like a merger — due diligence first, warmth on a delivery schedule. You soften their edges in public while they keep your ambitions from dissolving into socializing. Two cardinal signs can steer far together, provided you agree on the destination early.",
        score: 6,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Aquarius,
        heading: "Ideas in Perfect Weather",
        description: "Aquarius brings the vision and you bring the grace that gets it adopted, and the conversation between you never quite ends. They respect your independence too much to crowd it; you respect their oddness too much to file it down. Cool air, warm regard, rare ease.",
        score: 9,
    },
    CompatRow {
        user: Sign::Libra,
        other: Sign::Pisces,
        heading: "Watercolors on Silk",
        description: "Pisces matches your romanticism and raises you a dream, which is lovely right up until someone needs to file the taxes. You keep things fair; they keep things felt, and neither instinct quite covers logistics. Beautiful, gentle, and in need of one sturdy shared calendar.",
        score: 6,
    },
];
