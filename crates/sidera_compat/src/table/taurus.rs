//! Compatibility entries for a Taurus user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Aries,
        heading: "The Stone and the Spark",
        description: "Aries arrives like a fire alarm in the middle of your quiet dinner, demanding motion when you were savoring stillness. Their urgency can be contagious in small doses, and your calm is the one force that reliably settles them. This works when Aries stops mistaking your patience for refusal.",
        score: 5,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Taurus,
        heading: "Garden Built for Two",
        description: "Two bulls build a life of good food, soft blankets, and plans that actually get finished. The comfort is real and so is the danger of ruts — when neither partner ever wants to move, the furniture and the arguments both stay in place for years. Schedule the occasional upheaval on purpose.",
        score: 8,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Gemini,
        heading: "Roots Versus Wings",
        description: "Gemini rearranges plans the way you rearrange a pantry — constantly and with enthusiasm — and it leaves you dizzy. You crave a settled rhythm; they treat rhythm as a cage. Affection survives here only when you stop keeping score of cancelled plans and they stop treating your steadiness as boredom.",
        score: 4,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Cancer,
        heading: "Hearth and Harvest",
        description: "Cancer wants to build a sanctuary and you want to stock it — few pairings agree this naturally on what a good life looks like. Their tides of feeling meet your unshakable presence, and both of you treat loyalty as a given rather than a negotiation. Quietly, this is one of the zodiac's most durable matches.",
        score: 9,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Leo,
        heading: "The Bull and the Sun King",
        description: "You and Leo are both fixed signs, which means neither of you backs down and both of you remember everything. Leo's extravagance collides with your ledger, yet you secretly enjoy the glow they throw over your carefully built world. Admire them out loud and they will defend your comforts like a royal decree.",
        score: 6,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Virgo,
        heading: "Earth Signs, Aligned Orbits",
        description: "Virgo notices what needs fixing and you supply the steady hands to fix it, usually before anyone else realizes there was a problem. Shared practicality makes daily life frictionless, and neither of you needs drama to feel alive. The risk is quiet parallel lives; keep choosing each other out loud.",
        score: 9,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Libra,
        heading: "Venus in Stereo",
        description: "You share a ruling planet with Libra, so beauty, pleasure, and good taste come standard in this pairing. The difference is pace: Libra curates endlessly while you commit early and hold on. Let them browse; they almost always come home to the comfort you built.",
        score: 7,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Scorpio,
        heading: "Opposite Banks of a Deep River",
        description: "Scorpio is your opposite sign and wants to possess what you want to protect — the intensity can be intoxicating or suffocating depending on the week. They go emotionally deeper than you thought necessary and pull you under with them. What you build together, nobody else can touch.",
        score: 7,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Sagittarius,
        heading: "The Homestead and the Horizon",
        description: "Sagittarius keeps a packed bag by the door and you keep a garden that needs watering — the logistics alone are a negotiation. Their restlessness can read as rejection of everything you offer, though it rarely is. This pairing needs a very long leash and a very warm porch light.",
        score: 4,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Capricorn,
        heading: "The Long Game, Played Together",
        description: "Capricorn's ambition gives your endurance a direction, and your warmth gives their climb a reason. You are both builders who measure love in actions, not speeches, so promises between you tend to come true. It is less fireworks than bedrock, and you both prefer it that way.",
        score: 9,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Aquarius,
        heading: "Tradition Meets the Future",
        description: "Aquarius wants to reinvent the household you spent years perfecting, on principle. Two fixed signs pulling in different centuries makes for spectacular stalemates. Curiosity is the only solvent here — theirs for your groundedness, yours for their strange and shining ideas.",
        score: 4,
    },
    CompatRow {
        user: Sign::Taurus,
        other: Sign::Pisces,
        heading: "The Anchor and the Dream",
        description: "Pisces floats through possibilities and you give them somewhere solid to land, which they repay in devotion and imagination. Your senses and their feelings speak a surprisingly similar language of comfort, art, and unhurried afternoons. Just mind the finances — someone has to, and it will be you.",
        score: 8,
    },
];
