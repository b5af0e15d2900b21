//! The yoga registry: every rule's predicate, identity text, and order.
//!
//! Registry order is output order, grouped the classical way: solar
//! (Surya-anchored), lunar (Chandra-anchored), pancha-mahapurusha,
//! neecha placements, conjunctions, lord-based, placement-based, nabhasa
//! ashraya and dala, and the sankhya counts. Predicates read only rashi
//! and bhava assignments off the kundali; no degrees, no aspect math.

use jataka_core::{
    Bhava, Graha, KENDRA_BHAVAS, Kundali, RashiSvabhava, SAPTA_GRAHAS, TRIKONA_BHAVAS,
    bhava_offset, is_kendra_offset, rashi_svabhava,
};

use crate::yoga::{
    NATURAL_BENEFICS, TARA_GRAHAS, YogaCategory, YogaRule, YogaStrength, benefic_in, co_placed,
    graha_offset, in_debilitation_rashi_uncancelled, in_own_rashi, malefic_in,
};

// ---------------------------------------------------------------------------
// Solar yogas
// ---------------------------------------------------------------------------

fn budhaditya(k: &Kundali) -> Option<YogaStrength> {
    if !co_placed(k, Graha::Surya, Graha::Buddh) {
        return None;
    }
    Some(if k.bhava(Graha::Surya).is_kendra() {
        YogaStrength::Strong
    } else {
        YogaStrength::Moderate
    })
}

/// Any tara graha at the given counted offset from an anchor graha.
fn tara_at_offset(k: &Kundali, anchor: Graha, offset: u8) -> bool {
    TARA_GRAHAS.iter().any(|&g| graha_offset(k, anchor, g) == offset)
}

fn vesi(k: &Kundali) -> Option<YogaStrength> {
    if tara_at_offset(k, Graha::Surya, 2) {
        Some(YogaStrength::Weak)
    } else {
        None
    }
}

fn vasi(k: &Kundali) -> Option<YogaStrength> {
    if tara_at_offset(k, Graha::Surya, 12) {
        Some(YogaStrength::Weak)
    } else {
        None
    }
}

fn ubhayachari(k: &Kundali) -> Option<YogaStrength> {
    if tara_at_offset(k, Graha::Surya, 2) && tara_at_offset(k, Graha::Surya, 12) {
        Some(YogaStrength::Strong)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Lunar yogas
// ---------------------------------------------------------------------------

fn sunapha(k: &Kundali) -> Option<YogaStrength> {
    if tara_at_offset(k, Graha::Chandra, 2) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn anapha(k: &Kundali) -> Option<YogaStrength> {
    if tara_at_offset(k, Graha::Chandra, 12) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn durudhara(k: &Kundali) -> Option<YogaStrength> {
    if tara_at_offset(k, Graha::Chandra, 2) && tara_at_offset(k, Graha::Chandra, 12) {
        Some(YogaStrength::Strong)
    } else {
        None
    }
}

fn gajakesari(k: &Kundali) -> Option<YogaStrength> {
    let moon = k.bhava(Graha::Chandra);
    let guru = k.bhava(Graha::Guru);
    if !is_kendra_offset(bhava_offset(moon, guru)) {
        return None;
    }
    // Strong only when the angular relation sits on actual angles of the
    // chart, not merely between the two grahas.
    Some(if moon.is_kendra() && guru.is_kendra() {
        YogaStrength::Strong
    } else {
        YogaStrength::Moderate
    })
}

fn adhi(k: &Kundali) -> Option<YogaStrength> {
    let count = NATURAL_BENEFICS
        .iter()
        .filter(|&&g| matches!(graha_offset(k, Graha::Chandra, g), 6 | 7 | 8))
        .count();
    match count {
        3 => Some(YogaStrength::Strong),
        2 => Some(YogaStrength::Moderate),
        _ => None,
    }
}

fn chandra_mangala(k: &Kundali) -> Option<YogaStrength> {
    if !co_placed(k, Graha::Chandra, Graha::Mangal) {
        return None;
    }
    Some(if matches!(k.bhava(Graha::Chandra).number(), 2 | 11) {
        YogaStrength::Strong
    } else {
        YogaStrength::Moderate
    })
}

fn amala(k: &Kundali) -> Option<YogaStrength> {
    let present = NATURAL_BENEFICS
        .iter()
        .any(|&g| k.bhava(g) == Bhava::Karma || graha_offset(k, Graha::Chandra, g) == 10);
    if present { Some(YogaStrength::Moderate) } else { None }
}

fn shakata(k: &Kundali) -> Option<YogaStrength> {
    if matches!(graha_offset(k, Graha::Guru, Graha::Chandra), 6 | 8 | 12) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Pancha-mahapurusha yogas
// ---------------------------------------------------------------------------

/// Common mahapurusha shape: the graha angular and in one of its own
/// rashis. Always strong when present.
fn mahapurusha(k: &Kundali, graha: Graha) -> Option<YogaStrength> {
    if k.bhava(graha).is_kendra() && in_own_rashi(k, graha) {
        Some(YogaStrength::Strong)
    } else {
        None
    }
}

fn ruchaka(k: &Kundali) -> Option<YogaStrength> {
    mahapurusha(k, Graha::Mangal)
}

fn bhadra(k: &Kundali) -> Option<YogaStrength> {
    mahapurusha(k, Graha::Buddh)
}

fn hamsa(k: &Kundali) -> Option<YogaStrength> {
    mahapurusha(k, Graha::Guru)
}

fn malavya(k: &Kundali) -> Option<YogaStrength> {
    mahapurusha(k, Graha::Shukra)
}

fn shasha(k: &Kundali) -> Option<YogaStrength> {
    mahapurusha(k, Graha::Shani)
}

// ---------------------------------------------------------------------------
// Neecha placements
// ---------------------------------------------------------------------------

fn neecha(k: &Kundali, graha: Graha) -> Option<YogaStrength> {
    if in_debilitation_rashi_uncancelled(k, graha) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn neecha_surya(k: &Kundali) -> Option<YogaStrength> {
    neecha(k, Graha::Surya)
}

fn neecha_chandra(k: &Kundali) -> Option<YogaStrength> {
    neecha(k, Graha::Chandra)
}

fn neecha_mangal(k: &Kundali) -> Option<YogaStrength> {
    neecha(k, Graha::Mangal)
}

fn neecha_buddh(k: &Kundali) -> Option<YogaStrength> {
    neecha(k, Graha::Buddh)
}

fn neecha_guru(k: &Kundali) -> Option<YogaStrength> {
    neecha(k, Graha::Guru)
}

fn neecha_shukra(k: &Kundali) -> Option<YogaStrength> {
    neecha(k, Graha::Shukra)
}

fn neecha_shani(k: &Kundali) -> Option<YogaStrength> {
    neecha(k, Graha::Shani)
}

// ---------------------------------------------------------------------------
// Conjunction and kartari yogas
// ---------------------------------------------------------------------------

fn guru_mangala(k: &Kundali) -> Option<YogaStrength> {
    if co_placed(k, Graha::Guru, Graha::Mangal) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn guru_chandala(k: &Kundali) -> Option<YogaStrength> {
    if co_placed(k, Graha::Guru, Graha::Rahu) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn angaraka(k: &Kundali) -> Option<YogaStrength> {
    if co_placed(k, Graha::Mangal, Graha::Rahu) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn visha(k: &Kundali) -> Option<YogaStrength> {
    if co_placed(k, Graha::Shani, Graha::Chandra) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn papa_kartari(k: &Kundali) -> Option<YogaStrength> {
    if malefic_in(k, Bhava::Dhana) && malefic_in(k, Bhava::Vyaya) {
        Some(YogaStrength::Strong)
    } else {
        None
    }
}

fn shubha_kartari(k: &Kundali) -> Option<YogaStrength> {
    if benefic_in(k, Bhava::Dhana) && benefic_in(k, Bhava::Vyaya) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Lord-based yogas
// ---------------------------------------------------------------------------

fn raja(k: &Kundali) -> Option<YogaStrength> {
    for kendra in KENDRA_BHAVAS {
        for trikona in TRIKONA_BHAVAS {
            let kendra_lord = k.lord_of(kendra);
            let trikona_lord = k.lord_of(trikona);
            if kendra_lord != trikona_lord && co_placed(k, kendra_lord, trikona_lord) {
                let seat = k.bhava(kendra_lord);
                return Some(if seat.is_kendra() || seat.is_trikona() {
                    YogaStrength::Strong
                } else {
                    YogaStrength::Moderate
                });
            }
        }
    }
    None
}

fn dharma_karmadhipati(k: &Kundali) -> Option<YogaStrength> {
    let dharma_lord = k.lord_of(Bhava::Dharma);
    let karma_lord = k.lord_of(Bhava::Karma);
    if dharma_lord != karma_lord && co_placed(k, dharma_lord, karma_lord) {
        Some(YogaStrength::Strong)
    } else {
        None
    }
}

fn dhana(k: &Kundali) -> Option<YogaStrength> {
    let dhana_lord = k.lord_of(Bhava::Dhana);
    let labha_lord = k.lord_of(Bhava::Labha);
    if dhana_lord == labha_lord || !co_placed(k, dhana_lord, labha_lord) {
        return None;
    }
    Some(if matches!(k.bhava(dhana_lord).number(), 2 | 11) {
        YogaStrength::Strong
    } else {
        YogaStrength::Moderate
    })
}

fn lakshmi(k: &Kundali) -> Option<YogaStrength> {
    let fortune_lord = k.lord_of(Bhava::Dharma);
    let seat = k.bhava(fortune_lord);
    if !seat.is_kendra() && !seat.is_trikona() {
        return None;
    }
    Some(if in_own_rashi(k, fortune_lord) {
        YogaStrength::Strong
    } else {
        YogaStrength::Moderate
    })
}

fn saraswati(k: &Kundali) -> Option<YogaStrength> {
    let well_placed = |g: Graha| {
        let b = k.bhava(g);
        b.is_kendra() || b.is_trikona() || b == Bhava::Dhana
    };
    if well_placed(Graha::Guru) && well_placed(Graha::Shukra) && well_placed(Graha::Buddh) {
        Some(YogaStrength::Strong)
    } else {
        None
    }
}

fn kahala(k: &Kundali) -> Option<YogaStrength> {
    let bandhu_lord = k.lord_of(Bhava::Bandhu);
    if is_kendra_offset(bhava_offset(k.bhava(bandhu_lord), k.bhava(Graha::Guru))) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

/// Common viparita shape: a dusthana lord placed in a dusthana.
fn viparita(k: &Kundali, bhava: Bhava) -> Option<YogaStrength> {
    if k.bhava(k.lord_of(bhava)).is_dusthana() {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn harsha(k: &Kundali) -> Option<YogaStrength> {
    viparita(k, Bhava::Ari)
}

fn sarala(k: &Kundali) -> Option<YogaStrength> {
    viparita(k, Bhava::Randhra)
}

fn vimala(k: &Kundali) -> Option<YogaStrength> {
    viparita(k, Bhava::Vyaya)
}

fn daridra(k: &Kundali) -> Option<YogaStrength> {
    if k.bhava(k.lord_of(Bhava::Labha)).is_dusthana() {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Placement yogas
// ---------------------------------------------------------------------------

fn chatussagara(k: &Kundali) -> Option<YogaStrength> {
    if KENDRA_BHAVAS.iter().all(|&b| k.occupied(b)) {
        Some(YogaStrength::Strong)
    } else {
        None
    }
}

fn vasumati(k: &Kundali) -> Option<YogaStrength> {
    let count = NATURAL_BENEFICS
        .iter()
        .filter(|&&g| k.bhava(g).is_upachaya())
        .count();
    match count {
        3 => Some(YogaStrength::Strong),
        2 => Some(YogaStrength::Moderate),
        _ => None,
    }
}

fn parvata(k: &Kundali) -> Option<YogaStrength> {
    let benefic_angle = KENDRA_BHAVAS.iter().any(|&b| benefic_in(k, b));
    let clean_angles = KENDRA_BHAVAS.iter().all(|&b| !malefic_in(k, b));
    let clean_trik = !malefic_in(k, Bhava::Ari) && !malefic_in(k, Bhava::Randhra);
    if benefic_angle && clean_angles && clean_trik {
        Some(YogaStrength::Strong)
    } else {
        None
    }
}

fn rajalakshana(k: &Kundali) -> Option<YogaStrength> {
    let count = [Graha::Guru, Graha::Shukra, Graha::Buddh, Graha::Chandra]
        .iter()
        .filter(|&&g| k.bhava(g).is_kendra())
        .count();
    if count >= 2 { Some(YogaStrength::Moderate) } else { None }
}

// ---------------------------------------------------------------------------
// Nabhasa yogas: ashraya and dala
// ---------------------------------------------------------------------------

fn all_sapta_in(k: &Kundali, svabhava: RashiSvabhava) -> bool {
    SAPTA_GRAHAS.iter().all(|&g| rashi_svabhava(k.rashi(g)) == svabhava)
}

fn rajju(k: &Kundali) -> Option<YogaStrength> {
    if all_sapta_in(k, RashiSvabhava::Chara) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn musala(k: &Kundali) -> Option<YogaStrength> {
    if all_sapta_in(k, RashiSvabhava::Sthira) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn nala(k: &Kundali) -> Option<YogaStrength> {
    if all_sapta_in(k, RashiSvabhava::Dvisvabhava) {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn mala(k: &Kundali) -> Option<YogaStrength> {
    let benefic_angles = KENDRA_BHAVAS.iter().filter(|&&b| benefic_in(k, b)).count();
    let malefic_angles = KENDRA_BHAVAS.iter().any(|&b| malefic_in(k, b));
    if benefic_angles >= 3 && !malefic_angles {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn sarpa(k: &Kundali) -> Option<YogaStrength> {
    let malefic_angles = KENDRA_BHAVAS.iter().filter(|&&b| malefic_in(k, b)).count();
    let benefic_angles = KENDRA_BHAVAS.iter().any(|&b| benefic_in(k, b));
    if malefic_angles >= 3 && !benefic_angles {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Sankhya yogas
// ---------------------------------------------------------------------------

/// Number of distinct bhavas occupied by the seven body grahas.
fn sapta_bhava_spread(k: &Kundali) -> usize {
    let mut seen = [false; 12];
    for g in SAPTA_GRAHAS {
        seen[k.bhava(g).index() as usize] = true;
    }
    seen.iter().filter(|&&occupied| occupied).count()
}

/// Common sankhya shape: the spread equals a fixed count, so exactly one
/// of the seven fires for any chart.
fn sankhya(k: &Kundali, spread: usize) -> Option<YogaStrength> {
    if sapta_bhava_spread(k) == spread {
        Some(YogaStrength::Moderate)
    } else {
        None
    }
}

fn gola(k: &Kundali) -> Option<YogaStrength> {
    sankhya(k, 1)
}

fn yuga(k: &Kundali) -> Option<YogaStrength> {
    sankhya(k, 2)
}

fn shoola(k: &Kundali) -> Option<YogaStrength> {
    sankhya(k, 3)
}

fn kedara(k: &Kundali) -> Option<YogaStrength> {
    sankhya(k, 4)
}

fn pasha(k: &Kundali) -> Option<YogaStrength> {
    sankhya(k, 5)
}

fn damini(k: &Kundali) -> Option<YogaStrength> {
    sankhya(k, 6)
}

fn vallaki(k: &Kundali) -> Option<YogaStrength> {
    sankhya(k, 7)
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Every yoga rule, in evaluation and output order.
pub static YOGA_RULES: [YogaRule; 56] = [
    YogaRule {
        name: "Budhaditya Yoga",
        category: YogaCategory::Beneficial,
        description: "Surya and Buddh share a bhava.",
        effects: "Sharp intellect, skill with language, respect in learned circles.",
        detect: budhaditya,
    },
    YogaRule {
        name: "Vesi Yoga",
        category: YogaCategory::Beneficial,
        description: "A non-luminary graha occupies the 2nd from Surya.",
        effects: "Balanced outlook, truthful speech, steady fortunes.",
        detect: vesi,
    },
    YogaRule {
        name: "Vasi Yoga",
        category: YogaCategory::Beneficial,
        description: "A non-luminary graha occupies the 12th from Surya.",
        effects: "Self-reliance, capability in service, quiet influence.",
        detect: vasi,
    },
    YogaRule {
        name: "Ubhayachari Yoga",
        category: YogaCategory::Beneficial,
        description: "Non-luminary grahas flank Surya on both sides.",
        effects: "All-round prosperity and an equable, commanding nature.",
        detect: ubhayachari,
    },
    YogaRule {
        name: "Sunapha Yoga",
        category: YogaCategory::Beneficial,
        description: "A non-luminary graha occupies the 2nd from Chandra.",
        effects: "Self-earned wealth and a reputation for intelligence.",
        detect: sunapha,
    },
    YogaRule {
        name: "Anapha Yoga",
        category: YogaCategory::Beneficial,
        description: "A non-luminary graha occupies the 12th from Chandra.",
        effects: "Good health, renown, and a generous disposition.",
        detect: anapha,
    },
    YogaRule {
        name: "Durudhara Yoga",
        category: YogaCategory::Beneficial,
        description: "Non-luminary grahas flank Chandra on both sides.",
        effects: "Enjoyment of comforts, charitable nature, lasting wealth.",
        detect: durudhara,
    },
    YogaRule {
        name: "Gajakesari Yoga",
        category: YogaCategory::Beneficial,
        description: "Guru stands in a kendra counted from Chandra.",
        effects: "Lasting reputation, intelligence, and success over rivals.",
        detect: gajakesari,
    },
    YogaRule {
        name: "Adhi Yoga",
        category: YogaCategory::Beneficial,
        description: "Natural benefics occupy the 6th, 7th or 8th from Chandra.",
        effects: "Leadership, prosperity, and defeat of opposition.",
        detect: adhi,
    },
    YogaRule {
        name: "Chandra-Mangala Yoga",
        category: YogaCategory::Beneficial,
        description: "Chandra and Mangal share a bhava.",
        effects: "Earning power and enterprise, stronger in the wealth bhavas.",
        detect: chandra_mangala,
    },
    YogaRule {
        name: "Amala Yoga",
        category: YogaCategory::Beneficial,
        description: "A natural benefic holds the 10th from the lagna or from Chandra.",
        effects: "Spotless reputation and ethical conduct in career.",
        detect: amala,
    },
    YogaRule {
        name: "Shakata Yoga",
        category: YogaCategory::Malefic,
        description: "Chandra falls in the 6th, 8th or 12th from Guru.",
        effects: "Alternating fortunes; gains arrive and recede in cycles.",
        detect: shakata,
    },
    YogaRule {
        name: "Ruchaka Yoga",
        category: YogaCategory::Beneficial,
        description: "Mangal angular in its own rashi.",
        effects: "Courage, physical strength, and command over others.",
        detect: ruchaka,
    },
    YogaRule {
        name: "Bhadra Yoga",
        category: YogaCategory::Beneficial,
        description: "Buddh angular in its own rashi.",
        effects: "Eloquence, sharp learning, and long-lived success.",
        detect: bhadra,
    },
    YogaRule {
        name: "Hamsa Yoga",
        category: YogaCategory::Beneficial,
        description: "Guru angular in its own rashi.",
        effects: "Wisdom, righteousness, and the respect of the good.",
        detect: hamsa,
    },
    YogaRule {
        name: "Malavya Yoga",
        category: YogaCategory::Beneficial,
        description: "Shukra angular in its own rashi.",
        effects: "Refinement, artistic gifts, comforts and conveyances.",
        detect: malavya,
    },
    YogaRule {
        name: "Shasha Yoga",
        category: YogaCategory::Beneficial,
        description: "Shani angular in its own rashi.",
        effects: "Authority over land and people, endurance, discipline.",
        detect: shasha,
    },
    YogaRule {
        name: "Surya Neecha Yoga",
        category: YogaCategory::Malefic,
        description: "Surya in Tula, its debilitation rashi, cancellation not assessed.",
        effects: "Diminished confidence and friction with authority.",
        detect: neecha_surya,
    },
    YogaRule {
        name: "Chandra Neecha Yoga",
        category: YogaCategory::Malefic,
        description: "Chandra in Vrischika, its debilitation rashi, cancellation not assessed.",
        effects: "Emotional turbulence and restless mind.",
        detect: neecha_chandra,
    },
    YogaRule {
        name: "Mangal Neecha Yoga",
        category: YogaCategory::Malefic,
        description: "Mangal in Karka, its debilitation rashi, cancellation not assessed.",
        effects: "Scattered drive and difficulty sustaining effort.",
        detect: neecha_mangal,
    },
    YogaRule {
        name: "Buddh Neecha Yoga",
        category: YogaCategory::Malefic,
        description: "Buddh in Meena, its debilitation rashi, cancellation not assessed.",
        effects: "Indecision and muddled communication.",
        detect: neecha_buddh,
    },
    YogaRule {
        name: "Guru Neecha Yoga",
        category: YogaCategory::Malefic,
        description: "Guru in Makara, its debilitation rashi, cancellation not assessed.",
        effects: "Weakened judgement and delayed fortune.",
        detect: neecha_guru,
    },
    YogaRule {
        name: "Shukra Neecha Yoga",
        category: YogaCategory::Malefic,
        description: "Shukra in Kanya, its debilitation rashi, cancellation not assessed.",
        effects: "Strained relationships and muted enjoyment of comforts.",
        detect: neecha_shukra,
    },
    YogaRule {
        name: "Shani Neecha Yoga",
        category: YogaCategory::Malefic,
        description: "Shani in Mesha, its debilitation rashi, cancellation not assessed.",
        effects: "Impatience undermining long-term gains.",
        detect: neecha_shani,
    },
    YogaRule {
        name: "Guru-Mangala Yoga",
        category: YogaCategory::Beneficial,
        description: "Guru and Mangal share a bhava.",
        effects: "Energetic wisdom; drive guided by principle.",
        detect: guru_mangala,
    },
    YogaRule {
        name: "Guru-Chandala Yoga",
        category: YogaCategory::Malefic,
        description: "Guru and Rahu share a bhava.",
        effects: "Unorthodox beliefs; judgement clouded by ambition.",
        detect: guru_chandala,
    },
    YogaRule {
        name: "Angaraka Yoga",
        category: YogaCategory::Malefic,
        description: "Mangal and Rahu share a bhava.",
        effects: "Impulsive anger and accident-prone energy.",
        detect: angaraka,
    },
    YogaRule {
        name: "Visha Yoga",
        category: YogaCategory::Malefic,
        description: "Shani and Chandra share a bhava.",
        effects: "Heaviness of mind; pessimism that must be managed.",
        detect: visha,
    },
    YogaRule {
        name: "Papa Kartari Yoga",
        category: YogaCategory::Malefic,
        description: "Natural malefics occupy both the 2nd and the 12th, scissoring the lagna.",
        effects: "The self hemmed in; effort required for ordinary gains.",
        detect: papa_kartari,
    },
    YogaRule {
        name: "Shubha Kartari Yoga",
        category: YogaCategory::Beneficial,
        description: "Natural benefics occupy both the 2nd and the 12th, sheltering the lagna.",
        effects: "Protection and support arriving from both sides.",
        detect: shubha_kartari,
    },
    YogaRule {
        name: "Raja Yoga",
        category: YogaCategory::Beneficial,
        description: "A kendra lord and a trikona lord (distinct grahas) share a bhava.",
        effects: "Rise in status and authority; stronger when the pair sits in a kendra or trikona.",
        detect: raja,
    },
    YogaRule {
        name: "Dharma-Karmadhipati Yoga",
        category: YogaCategory::Beneficial,
        description: "The 9th and 10th lords (distinct grahas) share a bhava.",
        effects: "Career aligned with purpose; eminent success.",
        detect: dharma_karmadhipati,
    },
    YogaRule {
        name: "Dhana Yoga",
        category: YogaCategory::Beneficial,
        description: "The 2nd and 11th lords (distinct grahas) share a bhava.",
        effects: "Accumulation of wealth, stronger in the wealth bhavas themselves.",
        detect: dhana,
    },
    YogaRule {
        name: "Lakshmi Yoga",
        category: YogaCategory::Beneficial,
        description: "The 9th lord stands in a kendra or trikona.",
        effects: "Fortune and grace, stronger when the lord is in its own rashi.",
        detect: lakshmi,
    },
    YogaRule {
        name: "Saraswati Yoga",
        category: YogaCategory::Beneficial,
        description: "Guru, Shukra and Buddh each in a kendra, trikona or the 2nd.",
        effects: "Learning, eloquence and creative accomplishment.",
        detect: saraswati,
    },
    YogaRule {
        name: "Kahala Yoga",
        category: YogaCategory::Beneficial,
        description: "The 4th lord and Guru stand in mutual kendras.",
        effects: "Boldness and stubborn persistence that pays off.",
        detect: kahala,
    },
    YogaRule {
        name: "Harsha Yoga",
        category: YogaCategory::Beneficial,
        description: "The 6th lord placed in a dusthana.",
        effects: "Enemies and illness lose their grip; hidden resilience.",
        detect: harsha,
    },
    YogaRule {
        name: "Sarala Yoga",
        category: YogaCategory::Beneficial,
        description: "The 8th lord placed in a dusthana.",
        effects: "Fearlessness through crises; longevity of position.",
        detect: sarala,
    },
    YogaRule {
        name: "Vimala Yoga",
        category: YogaCategory::Beneficial,
        description: "The 12th lord placed in a dusthana.",
        effects: "Frugality and independence; losses kept small.",
        detect: vimala,
    },
    YogaRule {
        name: "Daridra Yoga",
        category: YogaCategory::Malefic,
        description: "The 11th lord placed in a dusthana.",
        effects: "Gains leak away; income needs careful guarding.",
        detect: daridra,
    },
    YogaRule {
        name: "Chatussagara Yoga",
        category: YogaCategory::Beneficial,
        description: "All four kendras are occupied.",
        effects: "Reputation reaching far; stability like the four oceans.",
        detect: chatussagara,
    },
    YogaRule {
        name: "Vasumati Yoga",
        category: YogaCategory::Beneficial,
        description: "Two or more natural benefics occupy upachaya bhavas.",
        effects: "Growing wealth independent of patronage.",
        detect: vasumati,
    },
    YogaRule {
        name: "Parvata Yoga",
        category: YogaCategory::Beneficial,
        description: "Benefics hold the kendras, with the 6th and 8th free of malefics.",
        effects: "Eminence, wit, and fortune standing tall like a mountain.",
        detect: parvata,
    },
    YogaRule {
        name: "Rajalakshana Yoga",
        category: YogaCategory::Beneficial,
        description: "Two or more of Guru, Shukra, Buddh and Chandra stand in kendras.",
        effects: "Regal bearing and refined manners.",
        detect: rajalakshana,
    },
    YogaRule {
        name: "Rajju Yoga",
        category: YogaCategory::Neutral,
        description: "All seven body grahas in movable rashis.",
        effects: "A wandering, ambitious temperament; fortune away from home.",
        detect: rajju,
    },
    YogaRule {
        name: "Musala Yoga",
        category: YogaCategory::Neutral,
        description: "All seven body grahas in fixed rashis.",
        effects: "Pride, stability, and settled accumulation.",
        detect: musala,
    },
    YogaRule {
        name: "Nala Yoga",
        category: YogaCategory::Neutral,
        description: "All seven body grahas in dual rashis.",
        effects: "Adaptable skill; fortunes tied to changing circumstances.",
        detect: nala,
    },
    YogaRule {
        name: "Mala Yoga",
        category: YogaCategory::Beneficial,
        description: "Benefics garland three or more kendras, with no malefic in any kendra.",
        effects: "Continuous comforts and helpful alliances.",
        detect: mala,
    },
    YogaRule {
        name: "Sarpa Yoga",
        category: YogaCategory::Malefic,
        description: "Malefics coil through three or more kendras, with no benefic in any kendra.",
        effects: "Struggles arriving in succession; dependence on others.",
        detect: sarpa,
    },
    YogaRule {
        name: "Gola Yoga",
        category: YogaCategory::Neutral,
        description: "The seven body grahas crowd a single bhava.",
        effects: "A life concentrated on one theme to the exclusion of others.",
        detect: gola,
    },
    YogaRule {
        name: "Yuga Yoga",
        category: YogaCategory::Neutral,
        description: "The seven body grahas occupy exactly two bhavas.",
        effects: "Polarized fortunes split between two arenas.",
        detect: yuga,
    },
    YogaRule {
        name: "Shoola Yoga",
        category: YogaCategory::Neutral,
        description: "The seven body grahas occupy exactly three bhavas.",
        effects: "Sharp, pointed effort; gains through decisive strikes.",
        detect: shoola,
    },
    YogaRule {
        name: "Kedara Yoga",
        category: YogaCategory::Neutral,
        description: "The seven body grahas occupy exactly four bhavas.",
        effects: "Usefulness to many; steady agrarian patience.",
        detect: kedara,
    },
    YogaRule {
        name: "Pasha Yoga",
        category: YogaCategory::Neutral,
        description: "The seven body grahas occupy exactly five bhavas.",
        effects: "Many obligations binding at once; skill in managing them.",
        detect: pasha,
    },
    YogaRule {
        name: "Damini Yoga",
        category: YogaCategory::Neutral,
        description: "The seven body grahas occupy exactly six bhavas.",
        effects: "Generosity and wide-ranging support.",
        detect: damini,
    },
    YogaRule {
        name: "Vallaki Yoga",
        category: YogaCategory::Neutral,
        description: "The seven body grahas spread across seven bhavas.",
        effects: "Versatile talents; attention divided among many pursuits.",
        detect: vallaki,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yoga::{YogaMatch, detect_yogas};
    use jataka_core::{ALL_RASHIS, Rashi};

    /// Mesha-lagna spread that triggers no yoga except the unavoidable
    /// sankhya count (five occupied bhavas, Pasha).
    fn base_places() -> [(Graha, u8); 9] {
        [
            (Graha::Surya, 3),
            (Graha::Chandra, 5),
            (Graha::Mangal, 10),
            (Graha::Buddh, 7),
            (Graha::Guru, 3),
            (Graha::Shukra, 9),
            (Graha::Shani, 7),
            (Graha::Rahu, 4),
            (Graha::Ketu, 10),
        ]
    }

    /// Build a kundali by bhava number, overriding the quiet base layout.
    fn kundali_at(lagna: Rashi, overrides: &[(Graha, u8)]) -> Kundali {
        let mut places = base_places();
        for &(graha, bhava) in overrides {
            places[graha.index() as usize].1 = bhava;
        }
        let mut rashis = [Rashi::Mesha; 9];
        for (graha, bhava) in places {
            rashis[graha.index() as usize] =
                ALL_RASHIS[(lagna.index() as usize + bhava as usize - 1) % 12];
        }
        Kundali::from_rashis(lagna, rashis)
    }

    fn find<'a>(matches: &'a [YogaMatch], name: &str) -> Option<&'a YogaMatch> {
        matches.iter().find(|m| m.name == name)
    }

    #[test]
    fn base_layout_is_quiet() {
        let matches = detect_yogas(&kundali_at(Rashi::Mesha, &[]));
        let names: Vec<_> = matches.iter().map(|m| m.name).collect();
        assert_eq!(names, ["Pasha Yoga"], "unexpected fires: {names:?}");
    }

    // -- solar ---------------------------------------------------------------

    #[test]
    fn budhaditya_elevated_in_kendra() {
        let k = kundali_at(Rashi::Mesha, &[(Graha::Buddh, 3)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Budhaditya Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Moderate);

        let k = kundali_at(Rashi::Mesha, &[(Graha::Surya, 10), (Graha::Buddh, 10)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Budhaditya Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Strong);
    }

    #[test]
    fn solar_flank_family() {
        // Shukra into the 2nd from Surya (bhava 4).
        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 4)]);
        let matches = detect_yogas(&k);
        assert!(find(&matches, "Vesi Yoga").is_some());
        assert!(find(&matches, "Ubhayachari Yoga").is_none());

        // Mangal into the 12th (bhava 2) as well: both flanks, all three fire.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 4), (Graha::Mangal, 2)]);
        let matches = detect_yogas(&k);
        assert!(find(&matches, "Vesi Yoga").is_some());
        assert!(find(&matches, "Vasi Yoga").is_some());
        assert_eq!(
            find(&matches, "Ubhayachari Yoga").unwrap().strength,
            YogaStrength::Strong
        );
    }

    #[test]
    fn nodes_never_form_flank_yogas() {
        // Rahu sits in the 2nd from Surya in the base layout already; only
        // a tara graha there may fire Vesi.
        let matches = detect_yogas(&kundali_at(Rashi::Mesha, &[]));
        assert!(find(&matches, "Vesi Yoga").is_none());
    }

    // -- lunar ---------------------------------------------------------------

    #[test]
    fn lunar_flank_family() {
        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 6)]);
        assert!(find(&detect_yogas(&k), "Sunapha Yoga").is_some());

        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 6), (Graha::Buddh, 4)]);
        let matches = detect_yogas(&k);
        assert!(find(&matches, "Sunapha Yoga").is_some());
        assert!(find(&matches, "Anapha Yoga").is_some());
        assert!(find(&matches, "Durudhara Yoga").is_some());
    }

    #[test]
    fn gajakesari_quarter_positions() {
        // Guru in the 4th from Chandra (bhava 8): fires at moderate, since
        // neither sits in a kendra of the chart.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Guru, 8)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Gajakesari Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Moderate);

        // Chandra and Guru both on chart angles: strong.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Chandra, 1), (Graha::Guru, 7)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Gajakesari Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Strong);

        // Guru in the 3rd from Chandra: no yoga.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Guru, 7)]);
        assert!(find(&detect_yogas(&k), "Gajakesari Yoga").is_none());
    }

    #[test]
    fn adhi_counts_benefics_past_chandra() {
        // Chandra bhava 5: the 6th-8th from it are bhavas 10, 11, 12.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Buddh, 11), (Graha::Shukra, 12)]);
        assert_eq!(
            find(&detect_yogas(&k), "Adhi Yoga").unwrap().strength,
            YogaStrength::Moderate
        );

        let k = kundali_at(
            Rashi::Mesha,
            &[(Graha::Buddh, 11), (Graha::Shukra, 12), (Graha::Guru, 12)],
        );
        assert_eq!(
            find(&detect_yogas(&k), "Adhi Yoga").unwrap().strength,
            YogaStrength::Strong
        );
    }

    #[test]
    fn chandra_mangala_wealth_elevation() {
        let k = kundali_at(Rashi::Mesha, &[(Graha::Mangal, 5)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Chandra-Mangala Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Moderate);

        let k = kundali_at(Rashi::Mesha, &[(Graha::Chandra, 11), (Graha::Mangal, 11)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Chandra-Mangala Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Strong);
    }

    #[test]
    fn shakata_from_guru() {
        // Chandra in the 8th from Guru: Guru bhava 3, Chandra bhava 10.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Chandra, 10)]);
        assert!(find(&detect_yogas(&k), "Shakata Yoga").is_some());
    }

    // -- mahapurusha ---------------------------------------------------------

    #[test]
    fn mahapurusha_all_five() {
        // Each graha on the lagna in its own rashi.
        let cases = [
            (Rashi::Mesha, Graha::Mangal, "Ruchaka Yoga"),
            (Rashi::Mithuna, Graha::Buddh, "Bhadra Yoga"),
            (Rashi::Dhanu, Graha::Guru, "Hamsa Yoga"),
            (Rashi::Tula, Graha::Shukra, "Malavya Yoga"),
            (Rashi::Makara, Graha::Shani, "Shasha Yoga"),
        ];
        for (lagna, graha, name) in cases {
            let k = kundali_at(lagna, &[(graha, 1)]);
            let matches = detect_yogas(&k);
            let m = find(&matches, name)
                .unwrap_or_else(|| panic!("{name} missing for {} lagna", lagna.name()));
            assert_eq!(m.strength, YogaStrength::Strong, "{name}");
        }
    }

    #[test]
    fn mahapurusha_requires_own_rashi() {
        // Mangal angular but in Makara: no Ruchaka.
        let k = kundali_at(Rashi::Mesha, &[]);
        assert!(find(&detect_yogas(&k), "Ruchaka Yoga").is_none());
    }

    #[test]
    fn mahapurusha_requires_kendra() {
        // Mangal in Vrischika (own) but in the 8th bhava.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Mangal, 8)]);
        assert!(find(&detect_yogas(&k), "Ruchaka Yoga").is_none());
    }

    // -- neecha --------------------------------------------------------------

    #[test]
    fn neecha_fires_per_graha() {
        // With Mesha lagna, bhava number = rashi number.
        let cases = [
            (Graha::Surya, 7, "Surya Neecha Yoga"),
            (Graha::Chandra, 8, "Chandra Neecha Yoga"),
            (Graha::Mangal, 4, "Mangal Neecha Yoga"),
            (Graha::Buddh, 12, "Buddh Neecha Yoga"),
            (Graha::Guru, 10, "Guru Neecha Yoga"),
            (Graha::Shukra, 6, "Shukra Neecha Yoga"),
            (Graha::Shani, 1, "Shani Neecha Yoga"),
        ];
        for (graha, bhava, name) in cases {
            let k = kundali_at(Rashi::Mesha, &[(graha, bhava)]);
            let matches = detect_yogas(&k);
            let m = find(&matches, name)
                .unwrap_or_else(|| panic!("{name} missing"));
            assert_eq!(m.strength, YogaStrength::Moderate);
            assert_eq!(m.category, YogaCategory::Malefic);
        }
    }

    #[test]
    fn neecha_fires_unconditionally_in_sign() {
        // A would-be cancellation (dispositor angular from lagna) changes
        // nothing: the rule is the raw placement.
        // Surya in Tula; Tula's lord Shukra on an angle.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Surya, 7), (Graha::Shukra, 4)]);
        assert!(find(&detect_yogas(&k), "Surya Neecha Yoga").is_some());
    }

    // -- conjunctions and kartari --------------------------------------------

    #[test]
    fn conjunction_pairs() {
        let cases: [(Graha, Graha, &str); 4] = [
            (Graha::Guru, Graha::Mangal, "Guru-Mangala Yoga"),
            (Graha::Guru, Graha::Rahu, "Guru-Chandala Yoga"),
            (Graha::Mangal, Graha::Rahu, "Angaraka Yoga"),
            (Graha::Shani, Graha::Chandra, "Visha Yoga"),
        ];
        for (a, b, name) in cases {
            // Park the pair in bhava 11 together.
            let k = kundali_at(Rashi::Mesha, &[(a, 11), (b, 11)]);
            assert!(
                find(&detect_yogas(&k), name).is_some(),
                "{name} should fire"
            );
        }
    }

    #[test]
    fn kartari_scissors() {
        let k = kundali_at(Rashi::Mesha, &[(Graha::Mangal, 2), (Graha::Shani, 12)]);
        assert!(find(&detect_yogas(&k), "Papa Kartari Yoga").is_some());

        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 2), (Graha::Buddh, 12)]);
        assert!(find(&detect_yogas(&k), "Shubha Kartari Yoga").is_some());
        assert!(find(&detect_yogas(&k), "Papa Kartari Yoga").is_none());
    }

    // -- lord-based ----------------------------------------------------------

    #[test]
    fn raja_yoga_seat_quality() {
        // Mesha lagna: 4th lord Chandra, 5th lord Surya. Co-place them in
        // bhava 2 (not kendra, not trikona): moderate.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Chandra, 2), (Graha::Surya, 2)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Raja Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Moderate);

        // Same pair on the lagna itself: strong.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Chandra, 1), (Graha::Surya, 1)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Raja Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Strong);
    }

    #[test]
    fn raja_yoga_requires_distinct_lords() {
        // Karka lagna makes Mangal lord of both a kendra (10th, Mesha) and
        // a trikona (5th, Vrischika); alone that must not fire.
        let k = kundali_at(Rashi::Karka, &[]);
        assert!(find(&detect_yogas(&k), "Raja Yoga").is_none());
    }

    #[test]
    fn dharma_karmadhipati_conjunction() {
        // Mesha lagna: 9th lord Guru, 10th lord Shani, together in bhava 3.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Shani, 3)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Dharma-Karmadhipati Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Strong);
    }

    #[test]
    fn dhana_lords_in_wealth_bhava() {
        // Mesha lagna: 2nd lord Shukra, 11th lord Shani, together in the 11th.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 11), (Graha::Shani, 11)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Dhana Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Strong);

        // Same lords in bhava 3: still a dhana yoga, just moderate.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 3), (Graha::Shani, 3)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Dhana Yoga").unwrap();
        assert_eq!(m.strength, YogaStrength::Moderate);
    }

    #[test]
    fn lakshmi_own_rashi_elevation() {
        // Mesha lagna, 9th lord Guru into the 4th (Karka): moderate.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Guru, 4)]);
        assert_eq!(
            find(&detect_yogas(&k), "Lakshmi Yoga").unwrap().strength,
            YogaStrength::Moderate
        );

        // Guru into the 9th itself (Dhanu, own rashi): strong.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Guru, 9)]);
        assert_eq!(
            find(&detect_yogas(&k), "Lakshmi Yoga").unwrap().strength,
            YogaStrength::Strong
        );
    }

    #[test]
    fn saraswati_three_benefics_placed() {
        let k = kundali_at(
            Rashi::Mesha,
            &[(Graha::Guru, 1), (Graha::Shukra, 2), (Graha::Buddh, 5)],
        );
        assert!(find(&detect_yogas(&k), "Saraswati Yoga").is_some());
    }

    #[test]
    fn kahala_mutual_kendras() {
        // Mesha lagna: 4th lord Chandra in bhava 5; Guru moved to bhava 8,
        // the 4th counted from Chandra.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Guru, 8)]);
        assert!(find(&detect_yogas(&k), "Kahala Yoga").is_some());
    }

    #[test]
    fn viparita_family() {
        // Mesha lagna: 6th lord Buddh, 8th lord Mangal, 12th lord Guru,
        // 11th lord Shani.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Buddh, 6)]);
        assert!(find(&detect_yogas(&k), "Harsha Yoga").is_some());

        let k = kundali_at(Rashi::Mesha, &[(Graha::Mangal, 8)]);
        assert!(find(&detect_yogas(&k), "Sarala Yoga").is_some());

        let k = kundali_at(Rashi::Mesha, &[(Graha::Guru, 12)]);
        assert!(find(&detect_yogas(&k), "Vimala Yoga").is_some());

        let k = kundali_at(Rashi::Mesha, &[(Graha::Shani, 6)]);
        let matches = detect_yogas(&k);
        let m = find(&matches, "Daridra Yoga").unwrap();
        assert_eq!(m.category, YogaCategory::Malefic);
    }

    // -- placement -----------------------------------------------------------

    #[test]
    fn chatussagara_full_angles() {
        // Base has bhavas 4, 7, 10 occupied; add Ketu to the lagna.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Ketu, 1)]);
        assert!(find(&detect_yogas(&k), "Chatussagara Yoga").is_some());

        let k = kundali_at(Rashi::Mesha, &[]);
        assert!(find(&detect_yogas(&k), "Chatussagara Yoga").is_none());
    }

    #[test]
    fn vasumati_benefic_count() {
        // Guru already in upachaya bhava 3; add Shukra in 11.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 11)]);
        assert_eq!(
            find(&detect_yogas(&k), "Vasumati Yoga").unwrap().strength,
            YogaStrength::Moderate
        );

        let k = kundali_at(Rashi::Mesha, &[(Graha::Shukra, 11), (Graha::Buddh, 6)]);
        assert_eq!(
            find(&detect_yogas(&k), "Vasumati Yoga").unwrap().strength,
            YogaStrength::Strong
        );
    }

    #[test]
    fn parvata_clean_angles() {
        // Clear the malefics off the kendras; Buddh stays in bhava 7.
        let k = kundali_at(Rashi::Mesha, &[(Graha::Shani, 2), (Graha::Mangal, 3)]);
        assert!(find(&detect_yogas(&k), "Parvata Yoga").is_some());

        // A malefic in the 8th spoils it.
        let k = kundali_at(
            Rashi::Mesha,
            &[(Graha::Shani, 2), (Graha::Mangal, 8)],
        );
        assert!(find(&detect_yogas(&k), "Parvata Yoga").is_none());
    }

    #[test]
    fn rajalakshana_pair_in_kendra() {
        let k = kundali_at(Rashi::Mesha, &[(Graha::Chandra, 4)]);
        assert!(find(&detect_yogas(&k), "Rajalakshana Yoga").is_some());
    }

    // -- nabhasa -------------------------------------------------------------

    #[test]
    fn ashraya_classes() {
        // All sapta grahas into movable rashis (bhavas 1, 4, 7, 10 for a
        // Mesha lagna).
        let k = kundali_at(
            Rashi::Mesha,
            &[
                (Graha::Surya, 1),
                (Graha::Chandra, 4),
                (Graha::Mangal, 7),
                (Graha::Buddh, 7),
                (Graha::Guru, 10),
                (Graha::Shukra, 4),
                (Graha::Shani, 1),
            ],
        );
        let matches = detect_yogas(&k);
        assert!(find(&matches, "Rajju Yoga").is_some());
        assert!(find(&matches, "Musala Yoga").is_none());
        assert!(find(&matches, "Nala Yoga").is_none());

        // Fixed rashis: bhavas 2, 5, 8, 11.
        let k = kundali_at(
            Rashi::Mesha,
            &[
                (Graha::Surya, 2),
                (Graha::Chandra, 5),
                (Graha::Mangal, 5),
                (Graha::Buddh, 8),
                (Graha::Guru, 11),
                (Graha::Shukra, 2),
                (Graha::Shani, 11),
            ],
        );
        assert!(find(&detect_yogas(&k), "Musala Yoga").is_some());
    }

    #[test]
    fn mala_and_sarpa() {
        let k = kundali_at(
            Rashi::Mesha,
            &[
                (Graha::Guru, 1),
                (Graha::Shukra, 4),
                (Graha::Shani, 2),
                (Graha::Mangal, 3),
            ],
        );
        assert!(find(&detect_yogas(&k), "Mala Yoga").is_some());

        let k = kundali_at(
            Rashi::Mesha,
            &[(Graha::Mangal, 1), (Graha::Surya, 4), (Graha::Buddh, 2)],
        );
        assert!(find(&detect_yogas(&k), "Sarpa Yoga").is_some());
    }

    // -- sankhya -------------------------------------------------------------

    #[test]
    fn sankhya_exactly_one_fires() {
        const SANKHYA: [&str; 7] = [
            "Gola Yoga",
            "Yuga Yoga",
            "Shoola Yoga",
            "Kedara Yoga",
            "Pasha Yoga",
            "Damini Yoga",
            "Vallaki Yoga",
        ];
        let layouts: [&[(Graha, u8)]; 3] = [
            &[],
            &[(Graha::Buddh, 2)],
            &[(Graha::Guru, 6), (Graha::Shani, 12)],
        ];
        for overrides in layouts {
            let matches = detect_yogas(&kundali_at(Rashi::Mesha, overrides));
            let fired: Vec<_> = matches
                .iter()
                .filter(|m| SANKHYA.contains(&m.name))
                .collect();
            assert_eq!(fired.len(), 1, "expected one sankhya yoga: {fired:?}");
        }
    }

    #[test]
    fn gola_single_bhava() {
        let all_in_two: Vec<(Graha, u8)> =
            SAPTA_GRAHAS.iter().map(|&g| (g, 2)).collect();
        let k = kundali_at(Rashi::Mesha, &all_in_two);
        assert!(find(&detect_yogas(&k), "Gola Yoga").is_some());
    }

    #[test]
    fn vallaki_full_spread() {
        let spread: Vec<(Graha, u8)> = SAPTA_GRAHAS
            .iter()
            .enumerate()
            .map(|(i, &g)| (g, i as u8 + 1))
            .collect();
        let k = kundali_at(Rashi::Mesha, &spread);
        assert!(find(&detect_yogas(&k), "Vallaki Yoga").is_some());
    }
}
