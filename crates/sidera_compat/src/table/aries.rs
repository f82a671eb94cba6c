//! Compatibility entries for an Aries user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Aries,
        other: Sign::Aries,
        heading: "Double Fire, Double Speed",
        description: "Two rams charging in the same direction make an unstoppable team, and two rams charging at each other make sparks fly in every sense. You recognize your own impatience and appetite for the win in this partner, which is thrilling until neither of you will yield. The pairing thrives when you pick shared battles instead of fighting private ones.",
        score: 7,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Taurus,
        heading: "The Spark and the Stone",
        description: "Your instinct is to move first and sort out the details mid-stride, while Taurus will not be rushed by anyone, least of all you. That patience can feel like an anchor dragging behind your rocket, yet it is often the only thing keeping your boldest plans from burning out. If you let Taurus set the foundation, you get to build higher than you would alone.",
        score: 5,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Gemini,
        heading: "Ignition Meets Ideas",
        description: "Gemini hands you a dozen new schemes a week and you are the one sign reckless enough to actually try them. The banter is fast, the plans are faster, and boredom never gets a foothold. Watch the follow-through: with your impulsiveness and Gemini's restlessness, someone has to remember to finish what you both started.",
        score: 8,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Cancer,
        heading: "Flame Against the Tide",
        description: "You lead with blunt momentum and Cancer leads with feeling, so your directness can land like a slammed door on their careful, protective heart. When you slow down enough to notice the moods you usually barrel past, Cancer offers a loyalty fiercer than anything you could win in open combat. It takes deliberate gentleness from you to get there.",
        score: 4,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Leo,
        heading: "Two Crowns, One Bonfire",
        description: "Leo matches your fire with theatrical warmth, and together you turn ordinary weekends into campaigns. You admire Leo's confidence; Leo adores that you never ask them to shrink. The only real battle is over the spotlight, and the fix is simple: take turns being the headline act.",
        score: 9,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Virgo,
        heading: "Charge First, Check Later",
        description: "Virgo sees the ten steps you skipped; you see the ten chances Virgo overthought into dust. The friction is real, but so is the payoff — a Virgo partner quietly fixes the details your velocity leaves scattered behind you. Gratitude, spoken out loud, is the toll this bridge charges.",
        score: 5,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Libra,
        heading: "The Warrior and the Diplomat",
        description: "Libra is your opposite sign, and the pull is magnetic: they smooth the rooms you charge into, and you give their endless weighing of options a decisive shove. You learn compromise from them grudgingly; they learn conviction from you gladly. Opposites here are less a clash than a complete set.",
        score: 7,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Scorpio,
        heading: "Open Flame, Deep Water",
        description: "Both of you are ruled by Mars in the old system, and it shows — neither of you does anything halfway. Your fights are declared in daylight; Scorpio's run silent and deep, which you find maddening and magnetic in equal measure. Trust, once forged between you, is armor-plated.",
        score: 6,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Sagittarius,
        heading: "Kindred Wildfire",
        description: "Sagittarius says yes to the trip before you finish the sentence, and that is exactly the energy you have been looking for. Adventure is the native language of this pairing, and honesty comes bluntly and cheerfully from both sides. Just keep a little fuel in reserve — you can exhaust even each other.",
        score: 9,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Capricorn,
        heading: "Sprint Versus Summit",
        description: "You want the peak today; Capricorn has a ten-year route map and the discipline to walk it. Their measured ambition can read as coldness to you, and your urgency reads as noise to them. Respect turns this standoff into a pincer movement — speed and strategy rarely lose together.",
        score: 5,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Aquarius,
        heading: "The Rebel Alliance",
        description: "Aquarius brings the radical blueprint and you bring the nerve to act on it before the committee votes. Neither of you has any patience for how things have always been done, which makes this one of the zodiac's great instigator pairings. The detached Aquarian cool occasionally needs your fire just to remember it is alive.",
        score: 8,
    },
    CompatRow {
        user: Sign::Aries,
        other: Sign::Pisces,
        heading: "The Ram in the Dreamscape",
        description: "Pisces drifts where you sprint, and your volume can scatter their delicate inner world like a stone through fog. Yet they absorb your bravado without flinching and reflect back a softness you rarely let yourself feel. Protect the dreamer instead of rushing them and this becomes unexpectedly tender territory.",
        score: 5,
    },
];
