/*
 * Copyright 2025 by Feldspar Contributors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Generated isogeny and map constants; do not edit by hand.

use crate::arith::BigInt;
use crate::curves::bls12_381::fields::{Fq, Fq2};

// G1 11-isogeny: x = XNUM/XDEN, y = y * YNUM/YDEN
pub(super) const ISO11_XNUM: [Fq; 12] = [
	Fq::from_montgomery_unchecked(BigInt([0x19e5090d7c131e23, 0x8ca0b4971bbb1300, 0x4fed18d61dce73d5, 0x02157b1cac1be7e5, 0xe669c499d547ad05, 0x1560563d8469052f])),
	Fq::from_montgomery_unchecked(BigInt([0x8469030706e39c7f, 0x31631594cf238b72, 0x250015fbad97c0c1, 0xab8220115236d08d, 0x42ed627903ebaa75, 0x09b8093a99c9fa5b])),
	Fq::from_montgomery_unchecked(BigInt([0x32c4dc364cd4f6d8, 0x18e363a0ef547d3b, 0xe3076d9b646da113, 0xa0dd18f7ffc1fa74, 0x274b21fa34a403fd, 0x0a893f7860c12652])),
	Fq::from_montgomery_unchecked(BigInt([0x425a8c246583eae2, 0x3e4decc0a917a89c, 0x096235fc604f2644, 0x37d2b8d6b6d55d1f, 0x54fcc4563cdb2c32, 0x1460ea288302f036])),
	Fq::from_montgomery_unchecked(BigInt([0x5f72537ad9af47fb, 0x36f1b99c67b19aa0, 0x99a2c09de346752c, 0xd97cf31169934d60, 0x774f6d0cf15bf141, 0x00f697222cfa3f3f])),
	Fq::from_montgomery_unchecked(BigInt([0x68aee71019244329, 0xf62d07b3af31dfbf, 0x9ae0bc0a4a0e2b9d, 0xfc4b1e140c4ab5a0, 0x028d44a75cb55f5a, 0x154ca157c1aaf6a6])),
	Fq::from_montgomery_unchecked(BigInt([0x95497d87101a1b14, 0xa231a2c02c908314, 0xb2888b97e5d6d05e, 0x95acf9fb836e3cb6, 0x3c220d4200b88ec0, 0x0dcfef3c0066088f])),
	Fq::from_montgomery_unchecked(BigInt([0x80c492870ee10dd8, 0xb7ccb62b3522abe6, 0xb63499f20aba4455, 0x083cab6cbc402276, 0x85ae956173ddfe64, 0x0c4bba05ea6a1417])),
	Fq::from_montgomery_unchecked(BigInt([0x17d678dfdb32056d, 0xe584f4a3868edd95, 0x1ce2eba0eecbf5fc, 0x4c325034f6dd512c, 0x5e28483c3acb6757, 0x1527107d85f8529e])),
	Fq::from_montgomery_unchecked(BigInt([0xac6689bf90423cca, 0x75ea73b15032ebdd, 0xb20ea1d2fdeccab4, 0x4ec3c31065ea360e, 0x5e0cd42395c1fc77, 0x1941e81b5028a4b8])),
	Fq::from_montgomery_unchecked(BigInt([0xb1a5d3f95c5e2e50, 0x906a31f932a5c3f6, 0xc4e65159bac03c47, 0x6408d878e1f570c4, 0xb7e11edaec198409, 0x1380cbf80e4ab04f])),
	Fq::from_montgomery_unchecked(BigInt([0x1d9c48618ca40021, 0x1e1a6b9dc6262b0f, 0x97cbb4ba8ded6b58, 0x333bcee644d348c8, 0x520f5f8d991dbc2b, 0x042021cb37df6ad5])),
];

pub(super) const ISO11_XDEN: [Fq; 11] = [
	Fq::from_montgomery_unchecked(BigInt([0xb962a077fdb0f945, 0xa6a9740fefda13a0, 0xc14d568c3ed6c544, 0xb43fc37b908b133e, 0x9c0b3ac929599016, 0x0165aa6c93ad115f])),
	Fq::from_montgomery_unchecked(BigInt([0x23279a3ba506c1d9, 0x92cfca0a9465176a, 0x3b294ab13755f0ff, 0x116dda1c5070ae93, 0xed4530924cec2045, 0x083383d6ed81f1ce])),
	Fq::from_montgomery_unchecked(BigInt([0x9885c2a6449fecfc, 0x4a2b54ccd37733f0, 0x17da9ffd8738c142, 0xa0fba72732b3fafd, 0xff364f36e54b6812, 0x0f29c13c660523e2])),
	Fq::from_montgomery_unchecked(BigInt([0xe349cc118278f041, 0xd487228f2f3204fb, 0xc9d325849ade5150, 0x43a92bd69c15c2df, 0x1c2c7844bc417be4, 0x12025184f407440c])),
	Fq::from_montgomery_unchecked(BigInt([0x587f65ae6acb057b, 0x1444ef325140201f, 0xfbf995e71270da49, 0xccda066072436a42, 0x7408904f0f186bb2, 0x13b93c63edf6c015])),
	Fq::from_montgomery_unchecked(BigInt([0xfb918622cd141920, 0x4a4c64423ecaddb4, 0x0beb232927f7fb26, 0x30f94df6f83a3dc2, 0xaeedd424d780f388, 0x06cc402dd594bbeb])),
	Fq::from_montgomery_unchecked(BigInt([0xd41f761151b23f8f, 0x32a92465435719b3, 0x64f436e888c62cb9, 0xdf70a9a1f757c6e4, 0x6933a38d5b594c81, 0x0c6f7f7237b46606])),
	Fq::from_montgomery_unchecked(BigInt([0x693c08747876c8f7, 0x22c9850bf9cf80f0, 0x8e9071dab950c124, 0x89bc62d61c7baf23, 0xbc6be2d8dad57c23, 0x17916987aa14a122])),
	Fq::from_montgomery_unchecked(BigInt([0x1be3ff439c1316fd, 0x9965243a7571dfa7, 0xc7f7f62962f5cd81, 0x32c6aa9af394361c, 0xbbc2ee18e1c227f4, 0x0c102cbac531bb34])),
	Fq::from_montgomery_unchecked(BigInt([0x997614c97bacbf07, 0x61f86372b99192c0, 0x5b8c95fc14353fc3, 0xca2b066c2a87492f, 0x16178f5bbf698711, 0x12a6dcd7f0f4e0e8])),
	Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
];

pub(super) const ISO11_YNUM: [Fq; 16] = [
	Fq::from_montgomery_unchecked(BigInt([0x8ea8800c1d7c3844, 0x015e61a6f7fb5898, 0x992e42b6f1f382b1, 0x9845a87ae8183edf, 0xcda08f0fc0e28643, 0x0cd10aa56555e389])),
	Fq::from_montgomery_unchecked(BigInt([0x203caaa05abd616c, 0x202cac3268df0787, 0x0940721567199599, 0x4f971352ee59c8f7, 0xdab8810fadcdd733, 0x0f736410773ea144])),
	Fq::from_montgomery_unchecked(BigInt([0xa625bd6dd5a2b471, 0xe92dcc1b432de182, 0x982b3024725aed96, 0x64768e670bcac1ce, 0xc74ae06313bf8cf9, 0x060a05f6adc0bd94])),
	Fq::from_montgomery_unchecked(BigInt([0x5da7026a404fecf0, 0xf608a65852ffe8f8, 0x2dad03ec007aeab6, 0xb495ab8dfa06a56c, 0x97d51870f33280df, 0x0e4a44059bf44442])),
	Fq::from_montgomery_unchecked(BigInt([0x60f39d380075596c, 0xed60b31b3e893102, 0xfb419fd261f84e23, 0xf697c6e45e13d55f, 0xe630d96992b38b45, 0x167af0add4645e0c])),
	Fq::from_montgomery_unchecked(BigInt([0x14cdf5ceeee3edce, 0x7d613f08d73f767d, 0x6d8335d7a28d233a, 0xba088aefcb462e17, 0x7bc088b4152f1bcf, 0x1803328f4bf7cf06])),
	Fq::from_montgomery_unchecked(BigInt([0x54598d4f2857d15b, 0x3c4fd27d2e0cc5e6, 0xa433e6b92b297866, 0x5ec478187cea890e, 0x9109119a5add0ddc, 0x1215f6c077a0087a])),
	Fq::from_montgomery_unchecked(BigInt([0x261e6a8d083add87, 0xe85d6d6e3adaaf6e, 0xe1c78c228e01a46e, 0xbff9a2f0b98fdeaf, 0x56211635c0675f72, 0x0f2be64653168c20])),
	Fq::from_montgomery_unchecked(BigInt([0x28ead67bb1f24b57, 0x4e6cae5b5fe84dcc, 0x29d8544ab65d87bd, 0x69f078e149ddde3d, 0xa20cd208515e579f, 0x056475b7cf217306])),
	Fq::from_montgomery_unchecked(BigInt([0x73d3414fc3ed1891, 0x42110a04a72cb5e8, 0xccdb43e30e7a0a36, 0xffd85293d9356478, 0xca1ac651180ed074, 0x019e548776ee0bce])),
	Fq::from_montgomery_unchecked(BigInt([0xb4354735760e7e85, 0x1d17e9ef079a53b0, 0xfccc95468e36fbf8, 0x5010efa76b3e3121, 0x8ffe9a62940bb618, 0x0739302686f683b4])),
	Fq::from_montgomery_unchecked(BigInt([0x04a0406ff4756c94, 0x1fcf881296c1fe3b, 0x4828f7900c96a82f, 0x567b7a272f6ab972, 0x12865fc410015946, 0x17bf7252232774f6])),
	Fq::from_montgomery_unchecked(BigInt([0x05e850fff8b9ae8b, 0x9055c16192ad2f0a, 0xeaba94898076efd1, 0x6331bc94dde656cf, 0xc7d4a97423b4f1c4, 0x0cd396679c9cc1c7])),
	Fq::from_montgomery_unchecked(BigInt([0x26f5944ac7296496, 0xaf81d9e51c367dc5, 0xd7ca1eb69d5fa67f, 0x6f13654dee8e098f, 0xd8d09449f658d2dc, 0x1597b81a69af2750])),
	Fq::from_montgomery_unchecked(BigInt([0xcf8a72b491bf5765, 0x8cc2f86285512a6f, 0x262a893b62435aca, 0xc410199320c930d1, 0x43230fd3dba86dbb, 0x09e9e8e1205ed83b])),
	Fq::from_montgomery_unchecked(BigInt([0x32d4593e82675a14, 0x2fdface89eefa9d5, 0x5f80ef25f6bba621, 0x1001bb0c0dc6aa87, 0x86627aa067c0e02f, 0x09938a188462d2e0])),
];

pub(super) const ISO11_YDEN: [Fq; 16] = [
	Fq::from_montgomery_unchecked(BigInt([0xeb6c359d47e52b1c, 0x18ef5f8a10634d60, 0xddfa71a0889d5b7e, 0x723e71dcc5fc1323, 0x52f45700b70d5c69, 0x0a8b981ee47691f1])),
	Fq::from_montgomery_unchecked(BigInt([0x616a3c4f5535b9fb, 0x6f5f037395dbd911, 0xf25f4cc5e35c65da, 0x3e50dffea3c62658, 0x6a33dca523560776, 0x0fadeff77b6bfe3e])),
	Fq::from_montgomery_unchecked(BigInt([0x2be9b66df470059c, 0x24a2c159a3d36742, 0x115dbe7ad10c2a37, 0xb6634a652ee5884d, 0x04fe8bb2b8d81af4, 0x01c2a7a256fe9c41])),
	Fq::from_montgomery_unchecked(BigInt([0xf27bf8ef3b75a386, 0x898b367476c9073f, 0x24482e6b8c2f4e5f, 0xc8e0bbd6fe110806, 0x59b0c17f7631448a, 0x11037cd58b3dbfbd])),
	Fq::from_montgomery_unchecked(BigInt([0x31c7912ea267eec6, 0x1dbf6f1c5fcdb700, 0xd30d4fe3ba86fdb1, 0x3cae528fbee9a2a4, 0xb1cce69b6aa9ad9a, 0x044393bb632d94fb])),
	Fq::from_montgomery_unchecked(BigInt([0xc66ef6efeeb5c7e8, 0x9824c289dd72bb55, 0x71b1a4d2f119981d, 0x104fc1aafb0919cc, 0x0e49df01d942a628, 0x096c3a09773272d4])),
	Fq::from_montgomery_unchecked(BigInt([0x9abc11eb5fadeff4, 0x32dca50a885728f0, 0xfb1fa3721569734c, 0xc4b76271ea6506b3, 0xd466a75599ce728e, 0x0c81d4645f4cb6ed])),
	Fq::from_montgomery_unchecked(BigInt([0x4199f10e5b8be45b, 0xda64e495b1e87930, 0xcb353efe9b33e4ff, 0x9e9efb24aa6424c6, 0xf08d33680a237465, 0x0d3378023e4c7406])),
	Fq::from_montgomery_unchecked(BigInt([0x7eb4ae92ec74d3a5, 0xc341b4aa9fac3497, 0x5be603899e907687, 0x03bfd9cca75cbdeb, 0x564c2935a96bfa93, 0x0ef3c33371e2fdb5])),
	Fq::from_montgomery_unchecked(BigInt([0x7ee91fd449f6ac2e, 0xe5d5bd5cb9357a30, 0x773a8ca5196b1380, 0xd0fda172174ed023, 0x6cb95e0fa776aead, 0x0d22d5a40cec7cff])),
	Fq::from_montgomery_unchecked(BigInt([0xf727e09285fd8519, 0xdc9d55a83017897b, 0x7549d8bd057894ae, 0x178419613d90d8f8, 0xfce95ebdeb5b490a, 0x0467ffaef23fc49e])),
	Fq::from_montgomery_unchecked(BigInt([0xc1769e6a7c385f1b, 0x79bc930deac01c03, 0x5461c75a23ede3b5, 0x6e20829e5c230c45, 0x828e0f1e772a53cd, 0x116aefa749127bff])),
	Fq::from_montgomery_unchecked(BigInt([0x101c10bf2744c10a, 0xbbf18d053a6a3154, 0xa0ecf39ef026f602, 0xfc009d4996dc5153, 0xb9000209d5bd08d3, 0x189e5fe4470cd73c])),
	Fq::from_montgomery_unchecked(BigInt([0x7ebd546ca1575ed2, 0xe47d5a981d081b55, 0x57b2b625b6d4ca21, 0xb0a1ba04228520cc, 0x98738983c2107ff3, 0x13dddbc4799d81d6])),
	Fq::from_montgomery_unchecked(BigInt([0x09319f2e39834935, 0x039e952cbdb05c21, 0x55ba77a9a2f76493, 0xfd04e3dfc6086467, 0xfb95832e7d78742e, 0x0ef9c24eccaf5e0e])),
	Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
];

// G2 3-isogeny tables
pub(super) const ISO3_XNUM: [Fq2; 4] = [
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x31f5870aa0da772a, 0xd4ee4cf8fcc88bd9, 0xcaaabb6231111a45, 0x12c8a972773af377, 0x121ac615cf843e01, 0x047004ffe5b343d3])),
		Fq::from_montgomery_unchecked(BigInt([0x31f5870aa0da772a, 0xd4ee4cf8fcc88bd9, 0xcaaabb6231111a45, 0x12c8a972773af377, 0x121ac615cf843e01, 0x047004ffe5b343d3])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0xf3f2904944246262, 0x6c74f9eb4f9e45cc, 0xc17761990240403f, 0x7cfd7f15d1c974d7, 0xefc2e08e2b7b689c, 0x142de553dea0ed54])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x4005b7db5ded797a, 0x687183090984dd19, 0x867521d47590d604, 0x25f88bfa0aa05853, 0xd33a376f2d8df889, 0x0fea1f404a2f6fef])),
		Fq::from_montgomery_unchecked(BigInt([0x79f94824a2123131, 0xb63a7cf5a7cf22e6, 0xe0bbb0cc8120201f, 0x3e7ebf8ae8e4ba6b, 0x77e1704715bdb44e, 0x0a16f2a9ef5076aa])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x6455a4a79d29113c, 0x632620408903bd17, 0x8711e5ec883ee586, 0xa93ded95a978dfd1, 0x08c975e7a4587184, 0x05a905970fc3efc3])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
];

pub(super) const ISO3_XDEN: [Fq2; 3] = [
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0x1f3affffff13ab97, 0xf25bfc611da3ff3e, 0xca3757cb3819b208, 0x3e6427366f8cec18, 0x03977bc86095b089, 0x04f69db13f39a952])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x447600000027552e, 0xdcb8009a43480020, 0x6f7ee9ce4a6e8b59, 0xb10330b7c0a95bc6, 0x6140b1fcfb1e54b7, 0x0381be097f0bb4e1])),
		Fq::from_montgomery_unchecked(BigInt([0x7588ffffffd8557d, 0x41f3ff646e0bffdf, 0xf7b1e8d2ac426aca, 0xb3741acd32dbb6f8, 0xe9daf5b9482d581f, 0x167f53e0ba7431b8])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
];

pub(super) const ISO3_YNUM: [Fq2; 4] = [
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x2326097b420332ed, 0x697b1b0a75ed2f1d, 0x4ee649a1bf1aa326, 0x0cac2797f89d0dde, 0x3b48c41795a7c12e, 0x11390c8c07ba10d7])),
		Fq::from_montgomery_unchecked(BigInt([0x2326097b420332ed, 0x697b1b0a75ed2f1d, 0x4ee649a1bf1aa326, 0x0cac2797f89d0dde, 0x3b48c41795a7c12e, 0x11390c8c07ba10d7])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0xfaf48e38e36df6a5, 0xd13eaa2c25ddc701, 0xc9add91297909b35, 0xc1fca909d66af9e9, 0x4857f50370b81e50, 0x0d83fea82e76661b])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xe205aaaaaaac8e37, 0xfcdc000768795556, 0x0c96011a8a1537dd, 0x1c06a963f163406e, 0x010df44c82a881e6, 0x174f45260f808feb])),
		Fq::from_montgomery_unchecked(BigInt([0xd7f9555555531c74, 0x21cffff748daaaa8, 0x5a9ad1866c9bbe46, 0x4870a2210221d251, 0x4a0db369c0a32af1, 0x02b1ccc429ff56af])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x158e425ed097b74f, 0x5dadc71c7e2c4bda, 0x9d5d01ae2fc08e96, 0x482181f1982a7a90, 0x2324e6d352d74573, 0x0884b37c10d55646])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
];

pub(super) const ISO3_YDEN: [Fq2; 4] = [
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0162fffffa765adf, 0x8f7bea480083fb75, 0x561b3c2259e93611, 0x11e19fc1a9c875d5, 0xca713efc00367660, 0x03c6a03d41da1151])),
		Fq::from_montgomery_unchecked(BigInt([0x0162fffffa765adf, 0x8f7bea480083fb75, 0x561b3c2259e93611, 0x11e19fc1a9c875d5, 0xca713efc00367660, 0x03c6a03d41da1151])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0x5db0fffffd3b02c5, 0xd713f52358ebfdba, 0x5ea60761a84d161a, 0xbb2c75a34ea6c44a, 0x0ac6735921c1119b, 0x0ee3d913bdacfbf6])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x66b10000003affc5, 0xcb1400e764ec0030, 0xa73e5eb56fa5d106, 0x8984c913a0fe09a9, 0x11e10afb78ad7f13, 0x05429d0e3e918f52])),
		Fq::from_montgomery_unchecked(BigInt([0x534dffffffc4aae6, 0x5397ff174c67ffcf, 0xbff273eb870b251d, 0xdaf2827152870915, 0x393a9cbaca9e2dc3, 0x14be74dbfaee5748])),
	),
	Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
];

// SSWU curve constants
pub(super) const SSWU_A1: Fq = Fq::from_montgomery_unchecked(BigInt([0x2f65aa0e9af5aa51, 0x86464c2d1e8416c3, 0xb85ce591b7bd31e2, 0x27e11c91b5f24e7c, 0x28376eda6bfc1835, 0x155455c3e5071d85]));
pub(super) const SSWU_B1: Fq = Fq::from_montgomery_unchecked(BigInt([0xfb996971fe22a1e0, 0x9aa93eb35b742d6f, 0x8c476013de99c5c4, 0x873e27c3a221e571, 0xca72b5e45a52d888, 0x06824061418a386b]));
pub(super) const SSWU_Z1: Fq = Fq::from_montgomery_unchecked(BigInt([0x886c00000023ffdc, 0x0f70008d3090001d, 0x77672417ed5828c3, 0x9dac23e943dc1740, 0x50553f1b9c131521, 0x078c712fbe0ab6e8]));
pub(super) const SSWU_A2: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0xe53a000003135242, 0x01080c0fdef80285, 0xe7889edbe340f6bd, 0x0b51375126310601, 0x02d6985717c744ab, 0x1220b4e979ea5467])),
	);
pub(super) const SSWU_B2: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x22ea00000cf89db2, 0x6ec832df71380aa4, 0x6e1b94403db5a66e, 0x75bf3c53a79473ba, 0x3dd3a569412c0a34, 0x125cdb5e74dc4fd1])),
		Fq::from_montgomery_unchecked(BigInt([0x22ea00000cf89db2, 0x6ec832df71380aa4, 0x6e1b94403db5a66e, 0x75bf3c53a79473ba, 0x3dd3a569412c0a34, 0x125cdb5e74dc4fd1])),
	);
pub(super) const SSWU_Z2: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x87ebfffffff9555c, 0x656fffe5da8ffffa, 0x0fd0749345d33ad2, 0xd951e663066576f4, 0xde291a3d41e980d3, 0x0815664c7dfe040d])),
		Fq::from_montgomery_unchecked(BigInt([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206])),
	);

// SVDW constants
pub(super) const SVDW_Z1: Fq = Fq::from_montgomery_unchecked(BigInt([0xcbe1fffffff6000a, 0x9827ffd8c7d7fff7, 0x17b8aedce8bcd83b, 0xc5fad9948998326e, 0xcd3da75be2de413d, 0x0c201972bcfd0614]));
pub(super) const SVDW_C1_1: Fq = Fq::from_montgomery_unchecked(BigInt([0xed1cffffffb455a1, 0x3283fed73d7bffc1, 0x804ac4babeea4207, 0x15c7f6e3eeff9fb8, 0x9985b69dac1a42fe, 0x0ef2e2b0fc697ad0]));
pub(super) const SVDW_C2_1: Fq = Fq::from_montgomery_unchecked(BigInt([0xd40e00000004aaa6, 0x529800124d680003, 0x5b547b3282528a06, 0x8179debaaeb8f988, 0xe47cd40851dc8c38, 0x13f10530db01638f]));
pub(super) const SVDW_C3_1: Fq = Fq::from_montgomery_unchecked(BigInt([0xa79d7ec1bb728f69, 0xde71ffc7bead6157, 0xfaee511a2882c350, 0x92d5303a3823f741, 0x70a8555ff782f798, 0x181220a203579aec]));
pub(super) const SVDW_C4_1: Fq = Fq::from_montgomery_unchecked(BigInt([0xf33dda12f68fe05a, 0x124b8e6490134267, 0x75b3ebbc407665ce, 0x260fd93e25abd98a, 0xd4054c95e27eb430, 0x039067234fadfb1f]));
pub(super) const SVDW_Z2: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	);
pub(super) const SVDW_C1_2: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xee1d00000009aaa1, 0x86840025e97c0007, 0x4f7823c40df41de8, 0x9e7c71f069ece051, 0x7dde005a606d6b99, 0x0de0f8777c82e085])),
		Fq::from_montgomery_unchecked(BigInt([0xaa270000000cfff3, 0x53cc0032fc34000a, 0x478fe97a6b0a807f, 0xb1d37ebee6ba24d7, 0x8ec9733bbf78ab2f, 0x09d645513d83de7e])),
	);
pub(super) const SVDW_C2_2: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x1804000000015554, 0x855000053ab00001, 0x633cb57c253c276f, 0x6e22d1ec31ebb502, 0xd3916126f2d14ca2, 0x17fbb8571a006596])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	);
pub(super) const SVDW_C3_2: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x3bd8d86de6303e44, 0x697376c820a968ae, 0x4ad2b457d282a50d, 0x3056d97ecd8e9378, 0xfab1c35c3fd6f0e7, 0x0c592c60126f8172])),
		Fq::from_montgomery_unchecked(BigInt([0x1dec6c36f3181f22, 0xb4b9bb641054b457, 0x25695a2be9415286, 0x982b6cbf66c749bc, 0x7d58e1ae1feb7873, 0x062c96300937c0b9])),
	);
pub(super) const SVDW_C4_2: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0fd7fffffff2aab8, 0xcadfffcbb51ffff5, 0x1fa0e9268ba675a4, 0xb2a3ccc60ccaede8, 0xbc52347a83d301a7, 0x102acc98fbfc081b])),
		Fq::from_montgomery_unchecked(BigInt([0xbfcaaaaaaa98e3a0, 0x0e7fffba46d55546, 0xd4d68c3364ddf231, 0x43851108110e928a, 0x506d9b4e0519578a, 0x158e66214ffab57a])),
	);
