//! Compatibility entries for an Aquarius user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Aries,
        heading: "The Blueprint and the Battering Ram",
        description: "Aries supplies the raw nerve your theories have been waiting for — you diagram the revolution, they kick the first door. Their directness never bores you and your oddness never scares them. Keep assigning them impossible missions and this alliance hums indefinitely.",
        score: 8,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Taurus,
        heading: "The Future Versus the Furniture",
        description: "Taurus has arranged a perfect life and would thank you not to reinvent it. Every instinct you have for disruption meets an equal and opposite instinct for preservation, fixed sign against fixed sign. Admiration across the barricade is possible; renovation requires unanimous consent.",
        score: 4,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Gemini,
        heading: "Bandwidth Unlimited",
        description: "Gemini surfs your wavelength like they were born on it, trading ideas, jokes, and conspiracy-adjacent theories at 3 a.m. without a flicker of fatigue. They never demand emotional performances you do not have in stock. Friendship-shaped love at its airy best.",
        score: 9,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Cancer,
        heading: "The Telescope and the Tidepool",
        description: "Cancer needs felt presence and you offer considered perspective, which is not the same warmth at all. Their hurt confuses you; your calm analysis of their hurt compounds it. You can learn their language of care, but it is a true second language — expect an accent.",
        score: 4,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Leo,
        heading: "Opposite Charges",
        description: "Leo is your opposite sign, radiating the personal warmth you distribute to humanity in general. Their heart-first grandeur meets your head-first cool, and the attraction across that gap is textbook physics. You humble each other in useful ways, mostly voluntarily.",
        score: 7,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Virgo,
        heading: "Theory, Meet Practice",
        description: "Virgo keeps asking how your utopia handles waste management, which is annoying precisely because it matters. Their detail-love and your system-love overlap less than you both assumed. Give them the implementation and keep the vision, and the friction turns productive.",
        score: 5,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Libra,
        heading: "The Senate of Two",
        description: "Libra debates you beautifully, concedes gracefully, and never mistakes your independence for indifference. Ideas, causes, and an enviable social orbit come standard. The rare partner who makes collaboration feel like freedom rather than committee work.",
        score: 9,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Scorpio,
        heading: "Cold Front, Deep Pressure",
        description: "Scorpio demands an all-access pass to an interior you keep deliberately unfurnished. Their intensity is a weather system; your detachment is a climate, and neither converts the other. Fixed against fixed — fascinating at a distance, stormy at close range.",
        score: 5,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Sagittarius,
        heading: "Unfenced Horizons",
        description: "Sagittarius matches your principles with appetite and your wanderfreedom with their own, no leash on either side. They drag your ideals out of the lab and road-test them. Optimism plus vision, minus possessiveness: among the zodiac's most breathable bonds.",
        score: 8,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Capricorn,
        heading: "The Reformer and the Registrar",
        description: "Capricorn runs the very institutions you sketch replacements for, which makes dinner conversation either electric or litigious. You share an old ruler in Saturn and it shows in your mutual discipline. When their structure funds your innovation, the results embarrass both your critics.",
        score: 6,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Aquarius,
        heading: "Parallel Frequencies",
        description: "Another Aquarius respects your autonomy so thoroughly you occasionally have to check the relationship is still on. Ideas flow, causes multiply, and nobody performs emotions on demand. Deeply companionable — just agree on who initiates actual human contact, and when.",
        score: 8,
    },
    CompatRow {
        user: Sign::Aquarius,
        other: Sign::Pisces,
        heading: "The Signal and the Sea",
        description: "Pisces receives on frequencies you transmit without realizing, and their compassion gives your ideals a pulse. Their boundlessness is emotional where yours is intellectual — adjacent infinities, not identical ones. Handle their feelings as data and you will lose the connection; handle them as weather and you can sail it.",
        score: 6,
    },
];
