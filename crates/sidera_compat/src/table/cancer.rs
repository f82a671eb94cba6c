//! Compatibility entries for a Cancer user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Aries,
        heading: "The Tide and the Torch",
        description: "Aries charges through your carefully tended emotional landscape with muddy boots and good intentions. Their honesty is never cruel on purpose, but you feel every decibel of it. If they learn to knock before entering your inner rooms, their courage becomes something you can actually lean on.",
        score: 4,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Taurus,
        heading: "The Shell and the Garden Wall",
        description: "Taurus offers exactly what your guarded heart checks for first: consistency without interrogation. They stay put through your moods and never weaponize your soft spots. Between their appetite for comfort and your instinct for care, home becomes the destination rather than the backdrop.",
        score: 9,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Gemini,
        heading: "Moonlight and Mercury",
        description: "Gemini's chatter delights your quiet evenings until you realize they have narrated every feeling except the one you needed named. Their lightness can be medicine for your brooding or salt in it, depending on timing. You must say what you need out loud; they genuinely cannot read tides.",
        score: 5,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Cancer,
        heading: "Two Moons, One Sky",
        description: "Another Cancer understands the unspoken rules — the anniversaries, the grudges, the way a kitchen can hold a whole apology. The care flows both directions without translation. The peril is a closed loop of moods with no outside air; someone has to open a window now and then.",
        score: 8,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Leo,
        heading: "The Hearth and the Throne",
        description: "Leo needs an audience and you need a sanctuary, which works beautifully when the sanctuary has a stage in it. Their warmth is real and generously aimed at you, though their volume sometimes drowns your quieter bids for care. Applaud them publicly and they will guard your softness with royal ferocity.",
        score: 6,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Virgo,
        heading: "Care, Itemized",
        description: "Virgo shows love by fixing the dripping tap you mentioned once, three weeks ago — a dialect of devotion you understand instantly. They bring order to your emotional weather without judging it. Gentle with each other's worry, you make an understated, deeply reliable pair.",
        score: 8,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Libra,
        heading: "The Crab and the Counterweight",
        description: "Libra keeps the conversation pleasant at precisely the moments you need it to get real, and their social calendar exhausts your need for nesting. Both of you avoid confrontation until it detonates. Name the hard things early and their fairness becomes a genuine balm for your moods.",
        score: 5,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Scorpio,
        heading: "Deep Water Treaty",
        description: "Scorpio is the rare partner who does not flinch at your depths — they were already down there waiting. Loyalty is absolute on both sides once trust sets, and the intimacy can feel telepathic. Guard against sealed-room dynamics where old wounds circulate with no fresh air.",
        score: 9,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Sagittarius,
        heading: "The Nest and the Open Road",
        description: "Sagittarius calls freedom what you call absence, and their blunt philosophical honesty lands on your heart like weather. They will show you wonders if you travel light, but you do not pack light, emotionally speaking. Without real effort, this is two good people homesick for different homes.",
        score: 4,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Capricorn,
        heading: "Opposite Shores, Same Sea",
        description: "Capricorn is your opposite sign: you build the home, they build the means, and each quietly admires what the other carries. Their reserve is not coldness, though it takes you years to fully believe that. Together you cover every flank a family could need covered.",
        score: 7,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Aquarius,
        heading: "The Heart and the Observatory",
        description: "Aquarius loves humanity in the abstract while you love people in the particular, preferably at your table. Their detachment reads to you as refrigeration; your attachment reads to them as gravity they never agreed to. Affection survives mainly on mutual translation and generous margins.",
        score: 4,
    },
    CompatRow {
        user: Sign::Cancer,
        other: Sign::Pisces,
        heading: "Water Understands Water",
        description: "Pisces feels the room the way you do and answers tenderness with tenderness, no translation needed. You give their drifting a harbor; they give your worry an imagination. One of you must still handle the practical tide charts, but emotionally this is home waters.",
        score: 9,
    },
];
