use crate::models::StrikeFund;

/// Funds pinned on the map, as `(name, url, lat, lng)`.
const LOCATED_FUNDS: &[(&str, &str, f64, f64)] = &[
    (
        "Solidaires Yonne 89",
        "https://www.helloasso.com/associations/solidaires-89/formulaires/1",
        47.8,
        3.6,
    ),
    (
        "Sud-Rail Paris-Sud-Est",
        "https://www.leetchi.com/c/greve-des-retraites-sud-rail-pse",
        48.8,
        2.3,
    ),
    (
        "Nettoyage Sorbonne Arc-en-ciel",
        "https://www.leetchi.com/c/soutien-arc-en-ciel-fevrier-2023-sorbonne-universite",
        48.8,
        2.3,
    ),
    (
        "Postiers sans papiers Chronopost",
        "https://www.cotizup.com/sans-papiers-chrono-alfortvill",
        48.8,
        2.3,
    ),
    (
        "1er degré et AESH",
        "https://www.helloasso.com/associations/arret-images/formulaires/1",
        48.8,
        2.3,
    ),
    (
        "Solidaires Aude 11",
        "https://www.helloasso.com/associations/union-syndicale-solidaires-11/formulaires/1",
        43.2,
        2.4,
    ),
    (
        "Lycée Balzac Paris AESH-AED",
        "https://www.leetchi.com/c/caisse-de-greve-balzac-2023-aesh-aed",
        48.8,
        2.3,
    ),
    (
        "FSU Seine Maritime",
        "https://fsu76.fsu.fr/caisse-de-greve-nul-ne-doit-renoncer-a-se-mobiliser",
        49.4,
        1.1,
    ),
    (
        "Union Syndicale Solidaires Meuse 55",
        "https://caisse-solidarite.fr/c/solidairesmeuse/",
        48.8,
        2.3,
    ),
    (
        "FSU Université de Lille",
        "https://www.helloasso.com/associations/l-amul/collectes/sdfsdf",
        50.6,
        3.1,
    ),
    (
        "Université Paris-Est Créteil",
        "https://www.leetchi.com/c/upec-cagnotte-retraites",
        48.8,
        2.3,
    ),
    (
        "Université Paris-Saclay",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-de-l-universite-paris-saclay",
        48.7,
        2.2,
    ),
    (
        "AG éducation Val d'Oise",
        "https://caisse-solidarite.fr/c/AG-educ-du-95-sud/",
        48.8,
        2.3,
    ),
    (
        "AG éducation Romainville, les Lilas, le Prè St Gervais",
        "https://caisse-solidarite.fr/c/AG-educ-rpl/",
        48.8,
        2.3,
    ),
    (
        "Caisse de grève AESH SNUDI FO 53",
        "https://www.helloasso.com/associations/snudi-fo-53/formulaires/3",
        48.1,
        -0.8,
    ),
    (
        "Lycée Léonard de Vinci Saint Witz",
        "https://www.cotizup.com/caisseldv",
        48.8,
        2.3,
    ),
    (
        "FSU Jura",
        "https://www.helloasso.com/associations/fsu-39/formulaires/1",
        46.7,
        5.6,
    ),
    (
        "AED du lycée professionnel Joseph Gallieni",
        "https://www.leetchi.com/c/aedgallieniengreve?utm_source=whatsapp&utm_medium=social_sharing",
        48.8,
        2.3,
    ),
    (
        "Lycée Romain Rolland Goussainville",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-du-lycee-romain-rolland-de-goussainville",
        48.8,
        2.3,
    ),
    (
        "BPI Bibliothèque (Centre Pompidou)",
        "https://www.helloasso.com/associations/collectif-352-55/formulaires/1",
        48.8,
        2.3,
    ),
    (
        "SNES Guadeloupe",
        "https://www.helloasso.com/associations/snes-guadeloupe/formulaires/1",
        16.2,
        -61.5,
    ),
    (
        "FSU Pays de la Loire",
        "https://www.helloasso.com/associations/snetap-fsu-pays-de-la-loire/collectes/snetap-fsu-caisse-de-greve-retraite-2023",
        48.1,
        -0.8,
    ),
    (
        "CGT spectacle (FNSAC)",
        "https://www.helloasso.com/associations/fnsac/formulaires/1",
        48.8,
        2.3,
    ),
    (
        "SNUDI-FO 53 Mayenne",
        "https://www.helloasso.com/associations/snudi-fo-53/formulaires/1",
        48.1,
        -0.8,
    ),
    (
        "Cheminots du Bourget",
        "https://www.cotizup.com/greve-bourget",
        48.8,
        2.3,
    ),
    (
        "Raffineurs Grandpuits et sous-traitants",
        "https://www.cotizup.com/raffineurssoustraitants",
        48.8,
        2.3,
    ),
    (
        "Lycée Robespierre Epinay-sur-Seine",
        "https://www.cotizup.com/greve-robespierre",
        48.8,
        2.3,
    ),
    (
        "Sud Santé Maine et Loire, Mayenne",
        "https://www.helloasso.com/associations/sud-sante-sociaux-49-53/formulaires/1",
        48.1,
        -0.8,
    ),
    (
        "Sundep Solidaire",
        "https://www.helloasso.com/associations/syndicat-de-la-formation-et-de-l-enseignement-prive-de-l-academie-de-toulouse-sundep-solidaires-occitanie-et-aquitaine/formulaires/1",
        43.6,
        1.4,
    ),
    (
        "SNETAP-FSU IDF",
        "https://www.helloasso.com/associations/snetap-fsu-ile-de-france/collectes/don-pour-la-caisse-de-solidarite-ile-de-france",
        48.8,
        2.3,
    ),
    (
        "CGT SNJ",
        "https://www.helloasso.com/associations/syndicat-national-des-journalistes-cgt/formulaires/1",
        48.8,
        2.3,
    ),
    (
        "Solidaire Ligne 3/3 bis",
        "https://www.cotizup.com/pour-aider-a-lutte-contre-cett",
        48.8,
        2.3,
    ),
    (
        "Hospitaliers et agents de laboratoire de Bordeaux",
        "https://www.cotizup.com/greve-labo-hospitaliers?fbclid=IwAR329fgBFyc8SghNnrHM8l_u8NTUQsHxZSRfGqySIFLpActk-Wgli-5LPpM",
        44.8,
        -0.6,
    ),
    (
        "Caisse de grève - AG féministe",
        "https://fr.ulule.com/caisse-de-greve-ag-feministe/?utm_campaign=presale_158190&utm_source=shared-from-Ulule-project-page-on-Twitter",
        48.8,
        2.3,
    ),
    (
        "Gréviste du collège Fabien de St-Denis (93)",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-du-college-fabien-saint-denis",
        48.8,
        2.3,
    ),
    (
        "Personnels du lycée Paul Robert Les Lilas",
        "https://www.papayoux.com/fr/cagnotte/caisse-de-greve-paul-robert",
        48.8,
        2.3,
    ),
    (
        "CGT Ferc SUP",
        "https://www.helloasso.com/associations/syndicat-cgt-ferc-sup-de-nantes-universite/formulaires/1",
        47.2,
        -1.6,
    ),
    (
        "AED 44",
        "https://www.helloasso.com/associations/collectif-aed-44/formulaires/1",
        47.2,
        -1.6,
    ),
    (
        "AESH/AED/AP/APS Collège Chantereine",
        "https://www.leetchi.com/c/caisse-de-greve-aesh-ap-aps-clg-chantereine-sarcelles",
        48.8,
        2.3,
    ),
    (
        "Solidaires Isère 38",
        "https://www.okpal.com/caisse-de-solidarite-pour-les-grevistes/#/",
        45.2,
        5.7,
    ),
    (
        "AG Chaville Meudon Educ",
        "https://www.cotizup.com/ag-meudon-chaville-educ",
        48.8,
        2.3,
    ),
    (
        "Transdev Cargo",
        "https://www.cotizup.com/solidariteavectransdevcargo",
        48.8,
        2.3,
    ),
    (
        "Caisse de grève de l'AG éducation 31",
        "https://caisse-solidarite.fr/c/AG-educ-31/",
        43.6,
        1.4,
    ),
    (
        "Caisse de solidarité AG éducation et ESR 34",
        "https://caisse-solidarite.fr/c/AG-educ-34/",
        43.6,
        3.9,
    ),
    (
        "Caisse de grève des salarié·es de SNF",
        "https://caisse-solidarite.fr/c/snf/",
        45.8,
        4.8,
    ),
    (
        "Toujours le pain levé !",
        "https://caisse-solidarite.fr/c/toujourslepainleve/",
        50.6,
        3.1,
    ),
    (
        "Caisse de grève des salarié·es de Mediapart",
        "https://caisse-solidarite.fr/c/mediapart/",
        48.8,
        2.3,
    ),
    (
        "Caisse de grève mutualisée de l'union syndicale Solidaires 55",
        "https://caisse-solidarite.fr/c/solidairesmeuse/",
        48.8,
        2.3,
    ),
    (
        "Cheminot·e·s SUD-Rail Pays-de-Loire dans la lutte contre la réforme des retraites",
        "https://caisse-solidarite.fr/c/cheminotspaysdelaloire/",
        47.2,
        -1.6,
    ),
    (
        "Caisse de grève des agent.es de Paris musées",
        "https://caisse-solidarite.fr/c/parismusées/",
        48.8,
        2.3,
    ),
    (
        "Caisse de grève des salarié·es de Smile France",
        "https://caisse-solidarite.fr/c/smilefrance/",
        48.8,
        2.3,
    ),
    (
        "Caisse de grève de l'AG collège René caillié",
        "https://caisse-solidarite.fr/c/collegerenecaillie/",
        44.8,
        -0.6,
    ),
    (
        "Caisse de solidarité des personnels de l'éducation en lutte Isère",
        "https://caisse-solidarite.fr/c/educ38/",
        45.2,
        5.7,
    ),
    (
        "Collège Jean Vigo Epinay-Sur-Seine",
        "https://www.papayoux.com/fr/cagnotte/caisse-de-greve-college-jean-vigo",
        48.8,
        2.3,
    ),
    (
        "Collège Evariste Galois Epinay-sur-Seine",
        "https://www.papayoux.com/fr/cagnotte/caisse-de-greve-college-evaristegalois-epinay-sur-seine",
        48.8,
        2.3,
    ),
    (
        "caisse de grève des cheminots Léon-Tregor.",
        "https://caisse-solidarite.fr/c/cheminotsleontregor/",
        48.6,
        -3.4,
    ),
    (
        "caisse de grève de l'Institut National d'Histoire de l'art",
        "https://www.cotizup.com/caissedegreveinha",
        48.8,
        2.3,
    ),
    (
        "Collège Roger Martin du Gard à Epinay sur Seine",
        "https://lydia-app.com/collect/86913-cagnotte-solidaire-rmg/fr",
        48.8,
        2.3,
    ),
    (
        "Lycée de Vizille",
        "https://www.leetchi.com/c/personnel-du-lycee-de-vizille-pour-une-retraite-solidaire-wmer7rkw",
        45.2,
        5.7,
    ),
    (
        "Solidaires 73",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-solidaires-73",
        45.6,
        6.0,
    ),
    (
        "CNT SO nettoyage PACA",
        "https://www.papayoux-solidarite.com//fr/collecte/nettoyage-en-lutte-contre-la-retraite-macron",
        43.3,
        5.4,
    ),
    (
        "Salariés de l'université de Bourgogne",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-universite-de-bourgogne",
        47.3,
        5.0,
    ),
    (
        "CGT cheminots de Versailles",
        "https://www.leetchi.com/c/caisse-de-greve-cgt-cheminots-versailles?utm_source=copylink&utm_medium=social_sharing",
        48.8,
        2.1,
    ),
    (
        "Collectif « Nos Retraites Nous Rassemblent » Strasbourg",
        "https://www.cotizup.com/caisse-greve-solidaire",
        48.6,
        7.8,
    ),
    (
        "intersyndicale Tricastin",
        "https://www.leetchi.com/c/tricastin-defense-des-retraites",
        44.3,
        4.7,
    ),
    (
        "Gaziers de Sorengy",
        "https://www.leetchi.com/c/storengy-defense-des-retraites",
        48.8,
        2.3,
    ),
    (
        "Lycée Angela Davis Saint-Denis",
        "https://www.leetchi.com/c/caisse-de-greve-angela-davis?utm_source=copylink&utm_medium=social_sharing",
        48.8,
        2.3,
    ),
    (
        "Caisse de greve education Beaujolais Val de Seine",
        "https://www.leetchi.com/c/caisse-de-greve-educ-bvs",
        46.0,
        4.7,
    ),
    (
        "SOLIDAIRES 28",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-pour-les-grevistes-deure-et-loir",
        48.4,
        1.5,
    ),
    (
        "Union Locale des syndicats CGT Antibes et sa région",
        "https://www.helloasso.com/associations/union-locale-des-syndicats-cgt-d-antibes-et-region/formulaires/1",
        43.6,
        7.1,
    ),
    (
        "lycée Jacques Feyder Epinay sur Seine",
        "https://www.leetchi.com/c/caisse-de-greve-lycee-feyder",
        48.8,
        2.3,
    ),
    (
        "lycée Romain Rolland Ivry sur Seine",
        "https://www.lepotcommun.fr/pot/0mjz8ni0",
        48.8,
        2.3,
    ),
    (
        "Solidaire Ille et Vilaine 35",
        "https://www.cotizup.com/solidaires35-greve-retraites",
        48.1,
        -1.7,
    ),
    (
        "L'Enclume - Enthousiaste Comité de Lutte de Mulhouse et Environs",
        "https://www.cotizup.com/caisse-de-greve-mulhouse",
        47.7,
        7.3,
    ),
    (
        "ASSO du 31 (Haute Garonne)",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-pour-les-salarie-e-s-des-asso",
        43.6,
        1.4,
    ),
    (
        "intersyndicale des Unions départementales de l'Eure",
        "https://www.leetchi.com/c/fond-de-greve-des-ud-de-leure-2023",
        48.8,
        2.3,
    ),
    (
        "union syndicale solidaires 21",
        "https://www.helloasso.com/associations/union-syndicale-solidaires-21/formulaires/1",
        47.3,
        5.0,
    ),
    (
        "comité de luttes de Champigny et environs",
        "https://gofund.me/206025ac",
        48.8,
        2.3,
    ),
    (
        "Grévistes du centre d'incinération d'Isséane - Issy-les-Moulineaux",
        "https://www.leetchi.com/c/soutien-grevistes-isseane",
        48.8,
        2.3,
    ),
    (
        "Grévistes du centre d'incinération TIRU de Saint-Ouen",
        "https://www.leetchi.com/c/soutien-aux-agents-grevistes-de-la-tiru-de-saint-ouen?utm_source=copylink&utm_medium=social_sharing",
        48.8,
        2.3,
    ),
    (
        "Personnel mobilisé de Sciences Po Bordeaux",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve",
        44.8,
        -0.6,
    ),
    (
        "AG interpro 54",
        "https://nancy-luttes.net/ag2020/CaisseDeGreveInterpro54.html",
        48.7,
        6.2,
    ),
    (
        "Comité de mobilisation de Rennes 2",
        "https://www.cotizup.com/caissedegreverennes2",
        48.1,
        -1.7,
    ),
    (
        "Lycée François Truffaut de Bondoufle (91)",
        "https://www.leetchi.com/c/cadeau-f-truffaut?utm_source=copylink&utm_medium=social_sharing",
        48.8,
        2.3,
    ),
    (
        "Cheminots Juvisy",
        "https://www.leetchi.com/c/caisse-de-greve-et-de-solidarite-pour-les-cheminots-de-juvisy-en-lutte-contre-la-retraite-a-64-ans?utm_source=copylink&utm_medium=social_sharing",
        48.8,
        2.3,
    ),
    (
        "Sud CT Loire Atlantique (44)",
        "https://www.leetchi.com/c/une-caisse-de-greve-pour-soutenir-les-grevistes-wxygrjyd",
        47.2,
        -1.6,
    ),
    (
        "Lycée Le Corbusier à Aubervilliers",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-corbu?fbclid=IwAR0glHeOgGmTS0o_AupohhwpIVfXsWK3nDmbXpwxJt3BC0FIzyvvSIAh9fM",
        48.8,
        2.3,
    ),
    (
        "ELECTRICIENS ET GAZIERS PARISIENS CONTRE LA RETRAITE A 64 ANS",
        "https://www.leetchi.com/c/les-electriciens-et-gaziers-parisiens-contre-la-retraite-a-64-ans",
        48.8,
        2.3,
    ),
    (
        "Comité de Luttes Montilien",
        "https://www.helloasso.com/associations/comite-de-luttes-montilien/formulaires/1",
        48.8,
        2.3,
    ),
    (
        "Personnels grévistes du lycée des Graves",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-et-de-solidarite-lycee-des-graves",
        44.8,
        -0.6,
    ),
    (
        "Caisse de grève Lycée Marcelin Berthelot",
        "https://www.leetchi.com/c/caisse-de-greve-pour-les-retraites-du-lycee-marcelin-berthelot?utm_source=whatsapp&utm_medium=social_sharing",
        48.8,
        2.3,
    ),
    (
        "Solidarité aux Pizzorno de Vitry",
        "https://www.helloasso.com/associations/caisse-de-solidarite-2/formulaires/36",
        48.8,
        2.3,
    ),
    (
        "Lycée Maurice Utrillo Stains",
        "https://www.papayoux.com/fr/cagnotte/caisse-de-greve-utrillo",
        48.8,
        2.3,
    ),
    (
        "Solidarité AED Lycée Bremontier",
        "https://lydia-app.com/pots?id=21632-caisse-solidarite-aed-bremontier",
        44.8,
        -0.6,
    ),
    (
        "Solidaires RATP métro lignes 3/3bis",
        "https://www.cotizup.com/pour-aider-a-lutte-contre-cett",
        48.8,
        2.3,
    ),
    (
        "SUD Rail Paris Sud Est",
        "https://www.leetchi.com/c/greve-des-retraites-sud-rail-pse?utm_source=copylink&utm_medium=social_sharing",
        48.8,
        2.3,
    ),
    (
        "Solidaires 86 Vienne",
        "https://www.helloasso.com/associations/union-syndicale-solidaires-11/formulaires/1",
        46.6,
        0.3,
    ),
    (
        "Solidaires 27 Eure",
        "https://www.leetchi.com/c/fond-de-greve-des-ud-de-leure-2023",
        48.8,
        2.3,
    ),
    (
        "Caisse de greve Sud Solidaires 06 Alpes Maritimes",
        "https://www.cotizup.com/solidaires06",
        43.7,
        7.3,
    ),
    (
        "Grevistes de la tiru de saint-ouen",
        "https://www.leetchi.com/c/soutien-aux-agents-grevistes-de-la-tiru-de-saint-ouen?utm_source=copylink&utm_medium=social_sharing",
        48.8,
        2.3,
    ),
    (
        "CGT Energie Charente",
        "https://www.leetchi.com/c/cgt-energie-charente-soutien-contre-la-reforme-des-retraites?fbclid=IwAR2GVjx9feF_gV9P-WnTxQ_q1YPUw8I0fYJTj33LxNg6IcEEKu3hcKUIvNo",
        45.6,
        0.2,
    ),
    (
        "Raffinerie Plateforme Normandie",
        "https://www.cotizup.com/plateformenormandie",
        49.4,
        0.2,
    ),
    (
        "Caisse de grève interprofessionnelle du Mantois",
        "https://sudeducation78.ouvaton.org/Une-caisse-de-greve-interpro-dans-le-Mantois",
        48.8,
        2.3,
    ),
    (
        "Technicentre Châtillon (maintenance TGV)",
        "https://www.leetchi.com/c/caisse-de-greve-des-cheminots-de-chatillon",
        48.8,
        2.3,
    ),
    (
        "Enseignants et AESH 1er degré 19ème arrondissement",
        "https://www.helloasso.com/associations/arret-images/formulaires/1",
        48.8,
        2.3,
    ),
    (
        "AG interprofessionnelle de Saint-Denis",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-ag-interpro-saint-denis",
        48.8,
        2.3,
    ),
    (
        "CGT des laboratoires Pierre Fabre",
        "https://www.helloasso.com/associations/syndicat-cgt-des-laboratoires-pierre-fabre/formulaires/1",
        43.6,
        1.4,
    ),
    (
        "Collectif des éboueurs de Nantes Métropole",
        "https://caisse-solidarite.fr/c/eboueurs-nantes/",
        47.2,
        -1.6,
    ),
    (
        "Cheminots de Paris Nord",
        "https://www.cotizup.com/bataille-retraite-cheminot-pno",
        48.8,
        2.3,
    ),
    (
        "Chauffeurs Poids Lourd de la Propreté de Paris",
        "https://caisse-solidarite.fr/c/chauffeurs-proprete-paris/",
        48.8,
        2.3,
    ),
    (
        "Universités et bibliothèques d'IDF en lutte",
        "https://www.cotizup.com/caisse-de-greve-univ-bib",
        48.8,
        2.3,
    ),
    (
        "AG des Territoriaux Ville de Paris pour la grève reconductible (Propreté, espaces verts, affaires scolaires, petite enfance, social, culture...)",
        "https://caisse-solidarite.fr/c/ville-de-paris-en-lutte",
        48.8,
        2.3,
    ),
    (
        "Eboueurs et travailleurs du SIVOM en grève - Varennes-Jarcy",
        "https://www.cotizup.com/eboueurs-sivom",
        48.8,
        2.3,
    ),
    (
        "Soutien aux éboueurs de Saint-Brieuc",
        "https://www.leetchi.com/c/soutien-eboueurs-grevistes?fbclid=IwAR37klksknkq53BHqXrsFU_GmzgXkW6KKbvN2la2MXiwwVpND6BMhSRrpGo",
        48.5,
        -2.8,
    ),
    (
        "Caisse de grève - Planning Familial de la Gironde",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-planning-familial-de-la-gironde",
        44.8,
        -0.6,
    ),
    (
        "Collectif MobiRetraites92",
        "https://www.cotizup.com/MobiRetraites92",
        48.8,
        2.3,
    ),
    (
        "Collège La Cerisaie",
        "https://www.leetchi.com/c/caisse-de-greve-la-cerisaie",
        48.8,
        2.3,
    ),
    (
        "Caisse de grève du collège E. Quinet",
        "https://www.leetchi.com/c/caisse-de-greve-du-college-e-quinet",
        43.3,
        5.4,
    ),
    (
        "Caisse de soutien aux éboueurs de Saint Etienne",
        "https://www.leetchi.com/fr/c/lQv64OVE?utm_source=facebook&fbclid=IwAR2IBl4krpXCE_CUCBimw4cON9T_ZDszYDXScaQz98L_TtB7-Wg4aGFNoDM",
        45.4,
        4.4,
    ),
    (
        "Solidaire RATP",
        "https://www.cotizup.com/caissedegrevesolidairesratp",
        48.8,
        2.3,
    ),
    (
        "Personnels grévistes du lycée Jean Vilar",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-lycee-jean-vilar",
        48.8,
        2.3,
    ),
    (
        "Caisse de grève du collège Albert Camus (Le Plessis-Trévise, 94)",
        "https://caisse-solidarite.fr/c/albertcamus-plessistrevise/",
        48.8,
        2.3,
    ),
    (
        "Éducation Groupe scolaire Nanteuil MONTREUIL",
        "https://www.cotizup.com/caissedegreve-nanteuil",
        48.8,
        2.3,
    ),
];

/// Funds organized around a trade or cause rather than a place.
const THEMATIC_FUNDS: &[(&str, &str)] = &[
    (
        "Caisse de grève Queer",
        "https://www.papayoux.com/fr/cagnotte/caisse-de-greve-queer",
    ),
    (
        "Sud-Éducation",
        "https://www.helloasso.com/associations/sud-education/collectes/solidarite-avec-les-grevistes-de-l-education-1",
    ),
    (
        "CNT SO",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-interpro-de-la-cnt-so",
    ),
    (
        "CGT",
        "https://www.leetchi.com/c/solidarite-cgt-mobilisation",
    ),
    (
        "Solidarité Lutte FNME CGT – Fédé nationale Mines énergie",
        "https://www.leetchi.com/c/solidarite-lutte-fnme-cgt",
    ),
    (
        "Syndicat des Travailleurs et Travailleuses du Jeu Vidéo (STJV)",
        "https://www.stjv.fr/2023/01/mobilisation-pour-les-retraites-caisse-de-greve-du-stjv/",
    ),
    (
        "Sud Rail Centraux",
        "https://www.cotizup.com/solidaritecheminots",
    ),
    (
        "Caisse de solidarité intersyndicale CGT-SUD",
        "https://caisse-solidarite.fr",
    ),
    (
        "Caisse de grève des Métiers du Livre",
        "https://www.cotizup.com/metier-du-livre-en-lutte",
    ),
    (
        "Caisse de grève des salariés de l'associatif ASSO Solidaires",
        "https://www.helloasso.com/associations/syndicat-asso-solidaires/formulaires/1",
    ),
    (
        "Caisse de grève des assistant.es d'éducation (AED) d'Île-de-France",
        "https://www.papayoux-solidarite.com/fr/collecte/caisse-de-greve-des-surveillant-es-d-ile-de-france",
    ),
    (
        "sud education",
        "https://www.sudeducation.org/caisse-de-greve-pour-soutenir-les-grevistes-de-leducation-et-de-lesr-contre-la-reforme-des-retraites/",
    ),
    (
        "AG Education Ile-de-France",
        "https://www.helloasso.com/associations/association-crbp/formulaires/2",
    ),
    (
        "Solidarité avec les luttes SUD PTT",
        "https://www.helloasso.com/associations/sud-ptt/formulaires/2",
    ),
    (
        "coordination antirépression Paris IdF 07 52 95 71 11",
        "https://www.helloasso.com/associations/collectives-solidarites",
    ),
    (
        "caisse de soutien antirépression Marseille 07.53.05.25.30",
        "https://www.helloasso.com/associations/liberte-toujours?banner=true",
    ),
];

/// Builds the curated list: located funds first, then thematic ones, in
/// literal order. Duplicate URLs are kept as listed.
pub fn build_records() -> Vec<StrikeFund> {
    let located = LOCATED_FUNDS
        .iter()
        .map(|&(name, url, lat, lng)| StrikeFund::located(name, url, lat, lng));
    let thematic = THEMATIC_FUNDS
        .iter()
        .map(|&(name, url)| StrikeFund::thematic(name, url));

    located.chain(thematic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[test]
    fn dataset_has_expected_size() {
        let funds = build_records();

        assert_eq!(funds.len(), 139);
        assert_eq!(funds.len(), LOCATED_FUNDS.len() + THEMATIC_FUNDS.len());
    }

    #[test]
    fn every_fund_has_name_and_url() {
        for fund in build_records() {
            assert!(!fund.name.trim().is_empty(), "empty name for {}", fund.url);
            assert!(!fund.url.trim().is_empty(), "empty url for {}", fund.name);
        }
    }

    #[test]
    fn every_fund_has_exactly_one_placement() {
        for fund in build_records() {
            assert!(
                fund.has_coordinates() != fund.is_thematic(),
                "ambiguous placement for {}",
                fund.name
            );
        }
    }

    #[test]
    fn coordinates_are_plausible_degrees() {
        for (name, _, lat, lng) in LOCATED_FUNDS {
            assert!((-90.0..=90.0).contains(lat), "bad lat for {name}");
            assert!((-180.0..=180.0).contains(lng), "bad lng for {name}");
        }
    }

    #[test]
    fn located_funds_precede_thematic_funds() {
        let funds = build_records();
        let first_thematic = funds
            .iter()
            .position(StrikeFund::is_thematic)
            .expect("dataset should contain thematic funds");

        assert_eq!(first_thematic, LOCATED_FUNDS.len());
        assert!(funds[first_thematic..].iter().all(StrikeFund::is_thematic));
    }

    #[rstest]
    #[case(0, "Solidaires Yonne 89")]
    #[case(122, "Éducation Groupe scolaire Nanteuil MONTREUIL")]
    #[case(123, "Caisse de grève Queer")]
    #[case(138, "caisse de soutien antirépression Marseille 07.53.05.25.30")]
    fn literal_order_is_stable(#[case] index: usize, #[case] name: &str) {
        assert_eq!(build_records()[index].name, name);
    }

    #[test]
    fn duplicate_urls_are_preserved() {
        let funds = build_records();
        let mut by_url: HashMap<&str, Vec<&str>> = HashMap::new();
        for fund in &funds {
            by_url.entry(fund.url.as_str()).or_default().push(fund.name.as_str());
        }

        let tiru = by_url
            .get("https://www.leetchi.com/c/soutien-aux-agents-grevistes-de-la-tiru-de-saint-ouen?utm_source=copylink&utm_medium=social_sharing")
            .expect("TIRU fund should be present");
        assert_eq!(
            tiru,
            &vec![
                "Grévistes du centre d'incinération TIRU de Saint-Ouen",
                "Grevistes de la tiru de saint-ouen",
            ]
        );

        let meuse = by_url
            .get("https://caisse-solidarite.fr/c/solidairesmeuse/")
            .expect("Meuse fund should be present");
        assert_eq!(meuse.len(), 2);
    }
}
