//! Compatibility entries for a Scorpio user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Aries,
        heading: "War Drums and Still Water",
        description: "Aries announces every intention at full volume while you move by currents they cannot see, and the asymmetry is half the attraction. Their fights end at sundown; yours are archived. The heat between you is undeniable — the question is whether either of you will ever fully disarm.",
        score: 6,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Taurus,
        heading: "The Vault and the Vineyard",
        description: "Taurus is your opposite sign, holding ground as instinctively as you hold secrets. Their uncomplicated steadiness is the rarest luxury your suspicious heart encounters, and you test it anyway. Once you stop testing, this becomes the kind of bond people write wills around.",
        score: 7,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Gemini,
        heading: "Smoke and Mirrors, Meet Smoke",
        description: "Gemini plays with masks for fun; you wear one for survival, and each of you recognizes the other's act immediately. Their lightness feels like evasion to you, and your intensity feels like interrogation to them. Fascination is guaranteed; peace is strictly optional.",
        score: 5,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Cancer,
        heading: "The Fortress Below the Waterline",
        description: "Cancer matches your emotional depth without flinching and asks only for loyalty you were already prepared to give. Their care softens your armor from the inside. Together you build a private world so complete that the main risk is forgetting to leave it occasionally.",
        score: 9,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Leo,
        heading: "Eclipse Season",
        description: "Leo performs in the light while you operate in shadow, and both of you are far too fixed to concede the stage. Their need for visible adoration grates against your instinct for privacy. The magnetism is real and mutual — so is the contest of wills underneath every calm dinner.",
        score: 6,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Virgo,
        heading: "Precision Instruments",
        description: "Virgo keeps confidences, reads fine print, and never performs feelings they do not have — your entire shortlist of virtues. You offer depth without drama in return, which quiets their anxious engine. Understated on the surface, unbreakable underneath.",
        score: 8,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Libra,
        heading: "The Inquisitor and the Host",
        description: "Libra keeps the surface flawless and you want to know what is under the polish, on principle. Their hedging reads as concealment to you even when it is mere manners. If they offer one unvarnished truth a day, you can forgive the charm offensive indefinitely.",
        score: 6,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Scorpio,
        heading: "Mutual Assured Devotion",
        description: "Another Scorpio offers the only intimacy with no shallow end, and you both dive without checking the depth. Absolute loyalty, absolute privacy, and a shared memory for slights that should alarm you both. Forgive early and often; neither of you has ever practiced.",
        score: 8,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Sagittarius,
        heading: "The Depths and the Distance",
        description: "Sagittarius answers your intensity with a travel itinerary, which is not the response you were going for. Their honesty is refreshingly free of games — and of the discretion you consider basic decency. You want roots in the deep; they want the horizon. Negotiate hard.",
        score: 5,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Capricorn,
        heading: "The Strategist's Accord",
        description: "Capricorn plays the long game with your favorite virtues: discipline, discretion, and zero tolerance for nonsense. Neither of you says much, and everything said is load-bearing. Power couples are built from exactly this alloy — just remember feelings are not a quarterly deliverable.",
        score: 8,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Aquarius,
        heading: "The Spy and the Satellite",
        description: "Aquarius observes everything from orbit including, maddeningly, you. Their detachment is not a wall you can siege — it is simply where they live, and no revelation you offer pulls them closer on command. Two fixed signs, two non-negotiable natures. Proceed with curiosity or not at all.",
        score: 5,
    },
    CompatRow {
        user: Sign::Scorpio,
        other: Sign::Pisces,
        heading: "The Deep End, Shared",
        description: "Pisces swims your depths like a native and surrenders trust before you even finish testing them, which disarms you completely. Your strength shelters their softness; their compassion launders your intensity into something gentler. Water's best alliance, and you both know it early.",
        score: 9,
    },
];
