//! Compatibility entries for a Capricorn user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Aries,
        heading: "The Summit and the Sprint",
        description: "Aries treats every obstacle as a personal insult to be rammed through today; you treat obstacles as terrain to be routed around by Q3. Their urgency wastes energy you would bank, yet it also moves things your caution would still be modeling. Useful ally, exhausting roommate.",
        score: 5,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Taurus,
        heading: "Bedrock Engagement",
        description: "Taurus understands that love is maintenance performed on schedule, and between your ambition and their endurance the estate practically builds itself. No games, no surprises, no wasted motion. The tenderness is real even when neither of you files the paperwork to express it.",
        score: 9,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Gemini,
        heading: "The Ledger and the Lottery",
        description: "Gemini improvises through life on charm and recent information, an approach your entire character was built to prevent. Their novelty is refreshing for a quarter, grating by the fiscal year. They make you laugh, which you budget for; they make you plan around them, which you resent.",
        score: 4,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Cancer,
        heading: "Opposite Sides of the Ledgerline",
        description: "Cancer is your opposite sign: they keep the hearth you are out earning, and each of you quietly envies the other's post. Their emotional weather confuses your barometers, but their loyalty passes every audit. The classic provider pairing, sturdy when both posts are honored.",
        score: 7,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Leo,
        heading: "The Boardroom and the Ballroom",
        description: "Leo spends applause like currency and expects you to match the exchange rate. Their radiance opens doors your reserve cannot, and your substance outlasts their standing ovations. Mutual respect is available here, priced in compliments you will have to actually say out loud.",
        score: 5,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Virgo,
        heading: "The Firm of Earth & Earth",
        description: "Virgo executes your strategy with a rigor you thought only you possessed, and asks for nothing but acknowledgment on time. Plans made between you tend to simply happen, which outsiders find eerie. Warmth must be scheduled, and you both genuinely prefer it that way.",
        score: 9,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Libra,
        heading: "Negotiated Elegance",
        description: "Libra lends your ambitions social polish and expects consultation in return, which slows the climb but improves the reception at the top. Their indecision taxes your patience; your bluntness taxes their nerves. Two cardinal signs — agree on the destination and split the map.",
        score: 6,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Scorpio,
        heading: "Silent Partners, Total Control",
        description: "Scorpio matches your discretion and doubles your resolve, and between you a handshake outweighs most contracts. Neither wastes trust or words. The empire you could build together is considerable; the cold wars, when they come, are glacial. Thaw early.",
        score: 8,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Sagittarius,
        heading: "The Plan and the Punchline",
        description: "Sagittarius treats your five-year plan as a first draft for improvisation and genuinely cannot fathom why that lands badly. Their optimism is a renewable resource you privately admire and publicly audit. Let them widen your horizon; make them fund their share of it.",
        score: 5,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Capricorn,
        heading: "The Merger of Equals",
        description: "Two Capricorns run the most solvent household in the zodiac and the quietest. You understand each other's ambition without translation and divide labor like seasoned partners. The risk is a life optimized into austerity — someone must occasionally declare a dividend and spend it on joy.",
        score: 8,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Aquarius,
        heading: "The Institution and the Insurgent",
        description: "Aquarius wants to overthrow systems you spent decades mastering, and they are irritatingly well-read about it. You share Saturn in the old rulerships — discipline underlies both of you, aimed in opposite directions. Structured rebellion is a niche, but you two could own it.",
        score: 6,
    },
    CompatRow {
        user: Sign::Capricorn,
        other: Sign::Pisces,
        heading: "The Wall and the Watercolor",
        description: "Pisces drifts through deadlines yet somehow softens everyone you negotiate with, including you. Their imagination decorates your structures; your structures keep their dreams out of the rain. Gentle, complementary, and dependent on you never monetizing their tenderness.",
        score: 7,
    },
];
