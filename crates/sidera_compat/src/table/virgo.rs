//! Compatibility entries for a Virgo user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Aries,
        heading: "The Checklist and the Charge",
        description: "Aries launches before you finish the risk assessment, then wonders why you look pained. Their momentum is genuinely useful — it drags your plans out of the revision stage — but the cleanup always lands on your desk. Say what you need plainly; subtlety bounces off a ram at full gallop.",
        score: 5,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Taurus,
        heading: "Tended Ground",
        description: "Taurus gives your careful service somewhere solid to land — they notice the small things you do and never mistake precision for fussing. Shared earth-sign sense makes money, home, and habit easy subjects instead of minefields. This pairing composts its problems into steady growth.",
        score: 9,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Gemini,
        heading: "Mercury Against Itself",
        description: "You and Gemini share a ruler and a love of information, but they skim where you verify. Their charming chaos generates exactly the loose ends you cannot leave alone. At its best this is a newsroom romance of ideas; at its worst, an unending copy-edit. Pick projects, not fights.",
        score: 6,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Cancer,
        heading: "Worry, Shared and Halved",
        description: "Cancer frets about the people and you fret about the logistics, which between you covers everything worth protecting. They read the feeling you forgot to have; you solve the problem they were feeling about. Tender, practical, and far more romantic than either of you will admit in public.",
        score: 8,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Leo,
        heading: "The Editor and the Epic",
        description: "Leo hands you a magnificent rough draft of a life and resents every red mark, even the ones that save the show. Their confidence can carry your caution to places analysis never books tickets to. Praise first, then polish — the order matters more with Leo than with anyone.",
        score: 5,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Virgo,
        heading: "Parallel Precision",
        description: "Another Virgo keeps standards you do not have to explain, and the household hums like a well-kept instrument. The shadow side is a shared talent for criticism slowly turning its lens inward on the relationship itself. Schedule imperfection; let some things stay gloriously unfixed.",
        score: 7,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Libra,
        heading: "Refinement, Two Ways",
        description: "Libra polishes surfaces and you polish systems, so between you everything gleams — though you privately question the budget for candles. Their indecision meets your analysis and sometimes nothing gets chosen at all. One of you must volunteer to be arbitrary occasionally.",
        score: 6,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Scorpio,
        heading: "The Analyst and the Abyss",
        description: "Scorpio's depths are the one dataset you cannot fully audit, and that mystery keeps you leaning in. They trust your discretion instinctively; you trust their loyalty once it is demonstrated, then completely. Quiet, intense, and built on the rarest currency you both deal in: reliability.",
        score: 8,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Sagittarius,
        heading: "The Map and the Territory",
        description: "Sagittarius burns the itinerary you laminated and calls it growth. Their big-picture optimism collides with your line-item realism at every fork in the road. You can be each other's missing hemisphere, but only with a tolerance for friction that neither of you should underestimate.",
        score: 5,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Capricorn,
        heading: "The Craftsman and the Cornerstone",
        description: "Capricorn sets the long objective and you perfect every step toward it — colleagues first, sweethearts shortly after, empire-builders eventually. Neither of you wastes words or money, and both keep promises as a matter of identity. Remember to celebrate; earth signs forget that part.",
        score: 9,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Aquarius,
        heading: "Method Meets Manifesto",
        description: "Aquarius wants to redesign the system; you want to debug the current one first. Their abstractions float above your spreadsheets, meeting mostly in mutual bafflement. Shared causes work better than shared routines here — give the partnership a mission and it finds its gear.",
        score: 5,
    },
    CompatRow {
        user: Sign::Virgo,
        other: Sign::Pisces,
        heading: "Opposite Ends of the Thread",
        description: "Pisces is your opposite sign: they dissolve the boundaries you spend all day drawing, and somehow that is exactly the medicine. You give their dreams scaffolding; they give your service a soul. The laundry will always be yours to fold, and you will rarely mind.",
        score: 7,
    },
];
